//! # 신문 문서 생성
//!
//! 발행일(`dateline.date`)을 제외하면 매번 똑같은 고정 내용을 반환합니다.
//! 날짜는 호출하는 쪽이 넘겨주므로 이 모듈의 함수는 모두 순수 함수입니다.

use crate::models::{Ad, Article, Dateline, Edition, Masthead, Section, SectionBody};
use chrono::NaiveDate;

const CITY: &str = "New Albion";

/// 발행일 표기 형식. 예: "Tuesday, March 05, 2024"
///
/// - `%A`: 요일 전체 이름
/// - `%B`: 월 전체 이름
/// - `%d`: 두 자리 일 (0으로 채움)
/// - `%Y`: 네 자리 연도
const DATE_FORMAT: &str = "%A, %B %d, %Y";

/// 발행일 문자열을 만듭니다.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// 주어진 날짜의 신문 한 호를 만듭니다.
pub fn build_edition(today: NaiveDate) -> Edition {
    Edition {
        masthead: Masthead {
            title: "The Daily Chronicle".to_string(),
            founded: "Founded 1896".to_string(),
            city: CITY.to_string(),
            motto: "All the News Fit to Print".to_string(),
        },
        dateline: Dateline {
            city: CITY.to_string(),
            date: format_date(today),
            price: "5¢".to_string(),
            edition: "Morning Edition".to_string(),
        },
        sections: vec![front_page(), society(), classifieds()],
    }
}

fn front_page() -> Section {
    Section {
        name: "Front Page".to_string(),
        body: SectionBody::Lead {
            articles: vec![
                article(
                    "Electric Carriage Astonishes Crowds on Market Street",
                    Some("Inventor Demonstrates Noiseless Motor Coach; Horses Unperturbed, Onlookers Enthralled"),
                    "By Edith Marlowe, Staff Correspondent",
                    &[
                        "A motored carriage, propelled without horse or steam, traversed Market Street at noon today to the great wonder of assembled citizens.",
                        "The contrivance, devised by a local engineer, emitted neither smoke nor cinder and advanced with steady purpose, drawing polite applause and much craning of necks.",
                        "Merchants report brisk talk of a coming age of gentle locomotion, though some gentlemen opine that the cobblestones shall have their say in the matter.",
                    ],
                ),
                article(
                    "Council Weighs Gaslight to Electric Scheme",
                    Some("Savings and Safety Argued in Lengthy Session"),
                    "By J. H. Pike",
                    &[
                        "After three hours of deliberation, the city council advanced a measure to replace select gas lamps with electric bulbs along the harbor promenade.",
                        "Advocates cite fewer mishaps and clearer light for evening promenades; critics warn of expense and untested wires overhead.",
                        "A final vote is expected Friday, with merchants and lamplighters alike attending in number.",
                    ],
                ),
            ],
        },
    }
}

fn society() -> Section {
    Section {
        name: "Society".to_string(),
        body: SectionBody::TwoColumn {
            articles: vec![
                article(
                    "Spring Cotillion Brings Splendor to Whitmore Hall",
                    Some("Orchestra Favored Waltzes; Refreshments Praised by All"),
                    "From Our Society Editor",
                    &[
                        "The annual Cotillion assembled a most agreeable company under garlands of laurel and paper lanterns, the ladies attired in creams and lilacs, the gentlemen in black and white.",
                        "Conversation sparkled, and no incident marred the occasion save a gentleman's glove gone missing, later recovered behind the palm.",
                    ],
                ),
                // 부제 없음(None)과 빈 필자명("")을 함께 보여주는 기사
                article(
                    "Lecture on Natural Philosophy Delights Young Minds",
                    None,
                    "",
                    &[
                        "Professor Delaney illustrated the properties of air with bell jars and feathers, to the lively approbation of students and their parents.",
                    ],
                ),
            ],
        },
    }
}

fn classifieds() -> Section {
    Section {
        name: "Classifieds".to_string(),
        body: SectionBody::Classifieds {
            ads: vec![
                ad("FOR LET", "A cheerful room with southern light. 12 Rose Lane."),
                ad(
                    "WANTED",
                    "Boy of good character for errand service at bookseller's.",
                ),
                ad(
                    "LOST",
                    "Small silver brooch in the shape of a lark. Reward offered.",
                ),
            ],
        },
    }
}

fn article(headline: &str, subhead: Option<&str>, byline: &str, body: &[&str]) -> Article {
    Article {
        headline: headline.to_string(),
        subhead: subhead.map(str::to_string),
        byline: byline.to_string(),
        body: body.iter().map(|p| p.to_string()).collect(),
    }
}

fn ad(title: &str, text: &str) -> Ad {
    Ad {
        title: title.to_string(),
        text: text.to_string(),
    }
}
