//! 安全建议生成
//!
//! 根据文章标题和摘要中的关键词判断威胁类别，生成多行安全建议文本（每行一条，前端按行渲染）。
//! 纯函数，不会失败。

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static RE_SHOOTING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(shootings?|shootouts?|shot|gunfire|gunm[ae]n|firearms?|opened fire)\b").unwrap()
});
static RE_KIDNAP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(kidnap(?:s|ped|ping|pings|per|pers)?|abduct(?:s|ed|ion|ions)?|missing child(?:ren)?)\b").unwrap()
});
static RE_FIRE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(fires?|blaze|flames?|burn(?:s|ed|ing|t)?|arson|explosions?|blasts?)\b").unwrap()
});
static RE_RIOT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(riots?|rioting|rioters|unrest|clash(?:es|ed)?|mobs?|curfew|stone[- ]pelting)\b").unwrap()
});
static RE_ASSAULT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(attack(?:s|ed)?|assault(?:s|ed)?|violence|violent|stabb(?:ed|ing)|murder(?:s|ed)?|molest(?:ed|ation)?|lynch(?:ed|ing)?)\b").unwrap()
});
static RE_THEFT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(thefts?|thief|thieves|robb(?:ery|eries|ed|ers?)|burglar(?:y|ies|s)?|snatch(?:ing|ed|ers?)?|loot(?:ed|ing)?|stolen|steal(?:s|ing)?|pickpocket(?:s|ing)?)\b").unwrap()
});

/// 紧急电话提示，始终作为最后一行
const EMERGENCY_LINE: &str = "In an emergency, call 112 (national emergency number) or 100 (police).";

/// 威胁类别
///
/// 声明顺序即优先级：同时命中多个类别时，排在前面的作为主类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatCategory {
    Shooting,
    Kidnapping,
    Fire,
    Riot,
    Assault,
    Theft,
    General,
}

impl ThreatCategory {
    /// 参与匹配的类别（不含 General）
    const MATCHABLE: [ThreatCategory; 6] = [
        ThreatCategory::Shooting,
        ThreatCategory::Kidnapping,
        ThreatCategory::Fire,
        ThreatCategory::Riot,
        ThreatCategory::Assault,
        ThreatCategory::Theft,
    ];

    fn pattern(self) -> Option<&'static Regex> {
        match self {
            ThreatCategory::Shooting => Some(&*RE_SHOOTING),
            ThreatCategory::Kidnapping => Some(&*RE_KIDNAP),
            ThreatCategory::Fire => Some(&*RE_FIRE),
            ThreatCategory::Riot => Some(&*RE_RIOT),
            ThreatCategory::Assault => Some(&*RE_ASSAULT),
            ThreatCategory::Theft => Some(&*RE_THEFT),
            ThreatCategory::General => None,
        }
    }

    /// 基础威胁等级 (1-10)
    pub fn base_level(self) -> u8 {
        match self {
            ThreatCategory::Shooting => 8,
            ThreatCategory::Kidnapping => 8,
            ThreatCategory::Fire => 7,
            ThreatCategory::Riot => 6,
            ThreatCategory::Assault => 6,
            ThreatCategory::Theft => 4,
            ThreatCategory::General => 1,
        }
    }

    fn headline(self) -> &'static str {
        match self {
            ThreatCategory::Shooting => "Armed violence reported: avoid the affected area and shelter indoors if you are nearby.",
            ThreatCategory::Kidnapping => "Abduction reported: keep children and vulnerable family members under close watch.",
            ThreatCategory::Fire => "Fire reported: stay clear of the area and follow instructions from fire services.",
            ThreatCategory::Riot => "Unrest reported: avoid crowds and gatherings in the affected locality.",
            ThreatCategory::Assault => "Violent incident reported: stay alert and avoid isolated places.",
            ThreatCategory::Theft => "Theft reported: keep your belongings secure and stay aware of your surroundings.",
            ThreatCategory::General => "Stay informed about local news and remain aware of your surroundings.",
        }
    }

    fn tips(self) -> &'static [&'static str] {
        match self {
            ThreatCategory::Shooting => &[
                "If you hear gunshots, move away from the sound and take cover behind solid walls.",
                "Do not gather to watch or film; let police secure the scene.",
                "Check in with family and share your location once you are safe.",
            ],
            ThreatCategory::Kidnapping => &[
                "Agree on a family code word and a check-in routine.",
                "Do not accept lifts or offers from strangers.",
                "Report suspicious vehicles or people loitering near schools to the police.",
            ],
            ThreatCategory::Fire => &[
                "Do not use lifts in a burning building; take the stairs.",
                "Cover your nose and mouth with a damp cloth to limit smoke inhalation.",
                "Keep roads clear for fire tenders and ambulances.",
            ],
            ThreatCategory::Riot => &[
                "Stay indoors and follow any curfew or prohibitory orders.",
                "Plan alternative routes that avoid the affected roads.",
                "Do not forward unverified messages or rumours.",
            ],
            ThreatCategory::Assault => &[
                "Travel in groups, especially after dark.",
                "Stay in well-lit, populated areas.",
                "Trust your instincts and report suspicious behaviour.",
            ],
            ThreatCategory::Theft => &[
                "Keep phones, wallets and jewellery out of sight in public.",
                "Lock doors and windows and secure vehicles.",
                "Be cautious of strangers approaching you on two-wheelers.",
            ],
            ThreatCategory::General => &[
                "Keep emergency contact numbers handy.",
                "Report any suspicious activity to local authorities.",
            ],
        }
    }
}

/// 威胁评估结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreatAssessment {
    pub category: ThreatCategory,
    /// 1-10
    pub level: u8,
}

/// 按优先级返回命中的所有类别
fn matched_categories(title: &str, description: &str) -> Vec<ThreatCategory> {
    let text = format!("{} {}", title, description);
    ThreatCategory::MATCHABLE
        .iter()
        .copied()
        .filter(|c| c.pattern().is_some_and(|re| re.is_match(&text)))
        .collect()
}

/// 评估威胁类别和等级
///
/// 等级 = 主类别基础等级 + 其余命中类别数，上限 10。
pub fn assess_threat(title: &str, description: &str) -> ThreatAssessment {
    let categories = matched_categories(title, description);
    match categories.split_first() {
        Some((&primary, rest)) => ThreatAssessment {
            category: primary,
            level: (primary.base_level() as usize + rest.len()).min(10) as u8,
        },
        None => ThreatAssessment {
            category: ThreatCategory::General,
            level: ThreatCategory::General.base_level(),
        },
    }
}

/// 生成安全建议
///
/// 主类别给出标题行和全部建议，其余命中类别各补充一条，最后一行为紧急电话。
pub fn generate_safety_advice(title: &str, description: &str) -> String {
    let categories = matched_categories(title, description);
    let primary = categories.first().copied().unwrap_or(ThreatCategory::General);

    let mut lines: Vec<&str> = Vec::with_capacity(8);
    lines.push(primary.headline());
    lines.extend_from_slice(primary.tips());
    for secondary in categories.iter().skip(1) {
        if let Some(tip) = secondary.tips().first() {
            lines.push(tip);
        }
    }
    lines.push(EMERGENCY_LINE);

    lines.join("\n")
}
