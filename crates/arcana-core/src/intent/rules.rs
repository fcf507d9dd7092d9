//! Ordered pattern rules for intent classification.
//!
//! Each rule is a set of regular expressions tested against the lowercased
//! question. Rules are evaluated top to bottom and the first rule with any
//! matching pattern wins; a pattern matches anywhere in the text.
//!
//! The order is part of the contract. Later rules are broad (YesNo accepts
//! anything that ends in a question mark), so narrower intents must be tried
//! first or they would never be reached. Reordering changes results for
//! questions such as "我的事业接下来会如何发展？", which is a Trend question
//! that also ends with a question mark.

use std::sync::LazyLock;

use regex::RegexSet;

use super::Intent;

/// Questions shorter than this (in characters, after trimming) are left
/// unclassified by [`detect`].
pub const MIN_CLASSIFY_CHARS: usize = 3;

const TREND_PATTERNS: &[&str] = &[
    r"走向|趋势|发展|变化|方向|未来|以后|接下来|将会|即将",
    r"如何发展|怎么变化|什么趋势|什么走向|什么方向|什么样子的",
    r"会.*发展|会.*变化|会.*走向|会.*趋势|会.*样子",
    r"发展.*如何|变化.*如何|走向.*如何|趋势.*如何|样子.*如何",
    r".*走向.*什么|.*趋势.*什么|.*发展.*什么|.*变化.*什么",
    r".*未来.*如何|.*以后.*如何|.*接下来.*如何",
    r"\btrends?\b",
    r"\bdirection\b",
    r"\bgoing forward\b",
    r"\bfrom now on\b",
    r"\bin the (near |coming )?future\b",
    r"\bfuture (of|for)\b",
    r"\bhow (will|would|is|are) .*\b(develop|evolve|change|unfold|progress|turn out)",
    r"\bwhere (is|are) .*\bheading\b",
    r"\bwhat('s| is) next\b",
];

const TIME_PATTERNS: &[&str] = &[
    r"什么时候|何时|多久|多长时间|什么时候.*会|何时.*会",
    r".*时间.*会|.*时候.*会|.*时候.*发生|.*时间.*发生",
    r".*多久.*会|.*多长时间.*会|.*多久.*能|.*多长时间.*能",
    r"\bwhen (will|would|should|shall|can|could|do|does|did|is|are|am)\b",
    r"\bhow (long|soon)\b",
    r"\bwhat time\b",
    r"\bwhich (day|week|month|season|year)\b",
];

const REASON_PATTERNS: &[&str] = &[
    r"为什么|为何|什么原因|什么导致|什么造成|什么引起",
    r".*为什么.*会|.*为何.*会|.*原因.*是|.*导致.*是",
    r".*造成.*是|.*引起.*是|.*原因.*什么|.*导致.*什么",
    r"\bwhy\b",
    r"\bwhat (caused|causes|is causing|led to|leads to)\b",
    r"\breasons? (for|why|behind)\b",
    r"\broot cause\b",
];

const COMPARISON_PATTERNS: &[&str] = &[
    r"比较|对比|相比|比较.*如何|对比.*如何|相比.*如何",
    r".*比.*如何|.*比.*怎么样|.*比.*更好|.*比.*更差",
    r".*和.*哪个|.*与.*哪个|.*跟.*哪个|.*同.*哪个",
    r"\bcompar(e|ed|ing|ison)\b",
    r"\bversus\b",
    r"\bvs\.?(\s|$)",
    r"\b(better|worse) than\b",
    r"\bwhich is (better|worse|stronger|wiser)\b",
];

const CHOICE_PATTERNS: &[&str] = &[
    r"选择|决定|应该.*还是|是.*还是|要.*还是|选.*还是",
    r"甲.*乙|这个.*那个|前者.*后者",
    r"哪个.*更好|哪个.*更合适|哪个.*更有利",
    r"选择.*哪个|选择.*什么|决定.*哪个|决定.*什么",
    r"\bshould i\b.*\bor\b",
    r"\b(choose|choosing|pick between|decide|deciding)\b",
    r"\beither\b.*\bor\b",
    r"\bwhich (one|option|path|offer|job|way)\b",
];

const ADVICE_PATTERNS: &[&str] = &[
    r"建议|推荐|应该.*做|如何.*做|怎么.*做|怎样.*做",
    r"怎么办|如何办|怎么处理|如何解决|怎样应对|如何改善",
    r"给我.*建议|给我.*指导|给我.*意见|给我.*方法",
    r"如何.*提高|怎么.*提高|怎样.*提高|如何.*改善",
    r"\badvi[cs]e\b",
    r"\brecommend",
    r"\bguidance\b",
    r"\bwhat (should|can) i do\b",
    r"\bhow (can|do|should|could) i\b",
    r"\bhow to\b",
];

const PREDICTION_PATTERNS: &[&str] = &[
    r"预测|预知|预见|预判|将会.*发生|可能.*发生",
    r"什么时候|何时|多久|多长时间|什么时候.*会",
    r"结果.*如何|结局.*如何|最终.*如何|后果.*如何",
    r".*会发生.*什么|.*会变成.*什么|.*会如何.*发展",
    r"\bpredict",
    r"\bforesee",
    r"\bwhat (will|is going to) happen\b",
    r"\b(outcome|result) of\b",
    r"\bwill .*\bhappen\b",
];

const YES_NO_PATTERNS: &[&str] = &[
    r"是否|会不会|能不能|可不可以|行不行|对不对|好不好",
    r"应该.*吗|可以.*吗|会.*吗|能.*吗|要.*吗|需要.*吗|适合.*吗",
    r"是不是|对不对|好不好|行不行",
    r"^.*[？?]$",
    r"^(is|are|am|was|do|does|did|will|would|should|shall|can|could|may|might|has|have)\b",
];

/// Rules in evaluation order. General is the fallback and has no patterns.
const RULE_TABLE: &[(Intent, &[&str])] = &[
    (Intent::Trend, TREND_PATTERNS),
    (Intent::Time, TIME_PATTERNS),
    (Intent::Reason, REASON_PATTERNS),
    (Intent::Comparison, COMPARISON_PATTERNS),
    (Intent::Choice, CHOICE_PATTERNS),
    (Intent::Advice, ADVICE_PATTERNS),
    (Intent::Prediction, PREDICTION_PATTERNS),
    (Intent::YesNo, YES_NO_PATTERNS),
];

struct IntentRule {
    intent: Intent,
    patterns: RegexSet,
}

static RULES: LazyLock<Vec<IntentRule>> = LazyLock::new(|| {
    RULE_TABLE
        .iter()
        .map(|(intent, patterns)| IntentRule {
            intent: *intent,
            patterns: RegexSet::new(*patterns).expect("intent patterns are valid regexes"),
        })
        .collect()
});

/// Classify a question. Always returns an intent; General when nothing matches.
pub fn classify(question: &str) -> Intent {
    let normalized = question.trim().to_lowercase();
    let intent = RULES
        .iter()
        .find(|rule| rule.patterns.is_match(&normalized))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::General);
    tracing::debug!(%intent, question = %normalized, "classified question");
    intent
}

/// Classify a question, leaving very short input unclassified.
pub fn detect(question: &str) -> Option<Intent> {
    if question.trim().chars().count() < MIN_CLASSIFY_CHARS {
        return None;
    }
    Some(classify(question))
}
