//! # 신문(Edition) 문서 모델
//!
//! `GET /api/news`가 반환하는 옛날 신문 한 호의 구조입니다.
//!
//! ```text
//! Edition
//! ├── masthead   (제호: 이름, 창간, 도시, 표어)
//! ├── dateline   (도시, 발행일, 가격, 판 이름)
//! └── sections[] (면)
//!     ├── layout = "lead" | "two-column"  → articles[]
//!     └── layout = "classifieds"          → ads[]
//! ```
//!
//! 면(Section)의 본문은 `SectionBody` 열거형 하나로 표현합니다.
//! 레이아웃이 곧 enum variant이므로 "articles와 ads 중 정확히 하나"라는 조건이
//! 타입 수준에서 보장됩니다.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 신문 한 호 전체
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    pub masthead: Masthead,
    pub dateline: Dateline,
    pub sections: Vec<Section>,
}

/// 제호 영역. 모든 값이 고정 문자열입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Masthead {
    pub title: String,
    pub founded: String,
    pub city: String,
    pub motto: String,
}

/// 날짜 표기줄. `date`만 요청 시점에 계산됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dateline {
    pub city: String,
    /// 예: "Tuesday, March 05, 2024"
    pub date: String,
    pub price: String,
    pub edition: String,
}

/// 신문의 한 면
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    // #[serde(flatten)]: body의 필드(layout, articles/ads)를
    // 별도 객체로 감싸지 않고 Section 객체에 바로 펼쳐 넣습니다.
    #[serde(flatten)]
    pub body: SectionBody,
}

impl Section {
    pub fn layout(&self) -> Layout {
        self.body.layout()
    }

    /// 기사 목록. 광고 면이면 None
    pub fn articles(&self) -> Option<&[Article]> {
        match &self.body {
            SectionBody::Lead { articles } | SectionBody::TwoColumn { articles } => {
                Some(articles.as_slice())
            }
            SectionBody::Classifieds { .. } => None,
        }
    }

    /// 광고 목록. 기사 면이면 None
    pub fn ads(&self) -> Option<&[Ad]> {
        match &self.body {
            SectionBody::Classifieds { ads } => Some(ads.as_slice()),
            _ => None,
        }
    }
}

/// 면의 레이아웃과 그에 맞는 내용물
///
/// `tag = "layout"`: variant 이름이 `"layout"` 필드 값으로 직렬화됩니다.
/// 예: `SectionBody::TwoColumn { .. }` → `{ "layout": "two-column", "articles": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "kebab-case")]
pub enum SectionBody {
    Lead { articles: Vec<Article> },
    TwoColumn { articles: Vec<Article> },
    Classifieds { ads: Vec<Ad> },
}

impl SectionBody {
    pub fn layout(&self) -> Layout {
        match self {
            SectionBody::Lead { .. } => Layout::Lead,
            SectionBody::TwoColumn { .. } => Layout::TwoColumn,
            SectionBody::Classifieds { .. } => Layout::Classifieds,
        }
    }
}

/// 면 레이아웃 종류 (본문 없이 종류만 필요할 때 사용)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Lead,
    TwoColumn,
    Classifieds,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Layout::Lead => "lead",
            Layout::TwoColumn => "two-column",
            Layout::Classifieds => "classifieds",
        })
    }
}

/// 기사
///
/// `subhead`는 없음(`None` → JSON `null`)과 빈 문자열을 구분합니다.
/// `byline`은 항상 존재하지만 빈 문자열일 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub headline: String,
    pub subhead: Option<String>,
    pub byline: String,
    /// 문단 목록 (최소 한 개)
    pub body: Vec<String>,
}

/// 안내 광고
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ad {
    pub title: String,
    pub text: String,
}
