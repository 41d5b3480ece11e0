//! Synthetic user profiles.

use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;

pub const URI_TEMPLATE: &str = "user_profile://{username}";

pub const ROLES: [&str; 5] = ["개발자", "디자이너", "기획자", "마케터", "관리자"];
pub const DEPARTMENTS: [&str; 5] = ["개발팀", "디자인팀", "기획팀", "마케팅팀", "인사팀"];
pub const LOCATIONS: [&str; 6] = ["서울", "부산", "대구", "인천", "광주", "대전"];
pub const AGE_RANGE: RangeInclusive<u8> = 25..=54;
pub const EXPERIENCE_RANGE: RangeInclusive<u8> = 1..=10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub role: &'static str,
    pub department: &'static str,
    pub location: &'static str,
    pub age: u8,
    /// Years of experience.
    pub experience: u8,
}

impl UserProfile {
    pub fn random<R: Rng + ?Sized>(username: impl Into<String>, rng: &mut R) -> Self {
        Self {
            username: username.into(),
            role: pick(&ROLES, rng),
            department: pick(&DEPARTMENTS, rng),
            location: pick(&LOCATIONS, rng),
            age: rng.gen_range(AGE_RANGE),
            experience: rng.gen_range(EXPERIENCE_RANGE),
        }
    }
}

fn pick<R: Rng + ?Sized>(items: &[&'static str], rng: &mut R) -> &'static str {
    items[rng.gen_range(0..items.len())]
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "사용자: {}", self.username)?;
        writeln!(f, "직책: {}", self.role)?;
        writeln!(f, "부서: {}", self.department)?;
        writeln!(f, "위치: {}", self.location)?;
        writeln!(f, "나이: {}세", self.age)?;
        write!(f, "경력: {}년", self.experience)
    }
}
