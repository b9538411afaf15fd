use chrono::{NaiveDate, NaiveTime};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use regex::Regex;

use testforge_core::{AttributeModel, AttributeType, RuleKind};

use crate::value::SyntheticValue;

const DEFAULT_STRING_LEN: u32 = 10;
/// Budgets at or below this use the shrinking-suffix arithmetic.
const SMALL_BUDGET: u32 = 20;
/// Large budgets reserve room for an 8-char token plus separator.
const LARGE_SUFFIX_RESERVE: usize = 9;

/// Tuning knobs for the synthesizer.
#[derive(Debug, Clone)]
pub struct SynthOptions {
    pub seed: u64,
    /// Length of the distinguishing suffix appended to unique strings.
    pub suffix_len: u32,
    pub separator: char,
    /// Deterministic stand-in for "today".
    pub base_date: NaiveDate,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            suffix_len: 4,
            separator: '_',
            base_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        }
    }
}

/// Produces valid, boundary-invalid and unique literals per attribute.
///
/// Seeded and deterministic: the same seed yields the same value stream.
/// The uniqueness source is a per-instance monotonically advancing
/// sequence, so distinct synthesizers must be namespaced by run.
#[derive(Debug)]
pub struct ValueSynthesizer {
    rng: ChaCha8Rng,
    options: SynthOptions,
    sequence: u64,
}

impl ValueSynthesizer {
    pub fn new(seed: u64) -> Self {
        Self::with_options(SynthOptions {
            seed,
            ..SynthOptions::default()
        })
    }

    pub fn with_options(options: SynthOptions) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(options.seed),
            options,
            sequence: 0,
        }
    }

    /// Literal satisfying every declared constraint of the attribute.
    pub fn valid_value(&mut self, attr: &AttributeModel) -> SyntheticValue {
        match attr.data_type {
            AttributeType::String if attr.is_email => SyntheticValue::Text(self.unique_email()),
            AttributeType::String => SyntheticValue::Text(self.valid_string(attr)),
            AttributeType::Integer => SyntheticValue::Int(self.int_in(attr, 1, 100)),
            AttributeType::Long => SyntheticValue::Int(self.int_in(attr, 1, 1000)),
            AttributeType::Double | AttributeType::Float | AttributeType::Decimal => {
                SyntheticValue::Float(self.float_in(attr))
            }
            AttributeType::Boolean => SyntheticValue::Bool(true),
            AttributeType::Date => SyntheticValue::Date(self.options.base_date),
            AttributeType::DateTime => {
                let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default();
                SyntheticValue::Timestamp(self.options.base_date.and_time(noon))
            }
            AttributeType::Enum => match attr.enum_values.first() {
                Some(literal) => SyntheticValue::Text(literal.clone()),
                None => SyntheticValue::Null,
            },
            AttributeType::Unknown => SyntheticValue::Null,
        }
    }

    /// Literal violating one known constraint of the attribute.
    pub fn invalid_value(&mut self, attr: &AttributeModel) -> SyntheticValue {
        match attr.data_type {
            AttributeType::String if attr.is_email => {
                SyntheticValue::Text("invalid-email".to_string())
            }
            AttributeType::String => {
                if !attr.is_nullable {
                    SyntheticValue::Text(String::new())
                } else if let Some(max) = attr.max_length {
                    SyntheticValue::Text(self.lowercase_string(max as usize + 1))
                } else {
                    SyntheticValue::Text("!?invalid?!".to_string())
                }
            }
            AttributeType::Integer
            | AttributeType::Long
            | AttributeType::Double
            | AttributeType::Float
            | AttributeType::Decimal => {
                if let Some(min) = attr.min_value {
                    SyntheticValue::Int(min - 1)
                } else if let Some(max) = attr.max_value {
                    SyntheticValue::Int(max + 1)
                } else {
                    SyntheticValue::Int(-1)
                }
            }
            AttributeType::Boolean => SyntheticValue::Text("not-a-boolean".to_string()),
            AttributeType::Date | AttributeType::DateTime => {
                SyntheticValue::Text("not-a-date".to_string())
            }
            AttributeType::Enum => SyntheticValue::Text("NOT_A_LITERAL".to_string()),
            AttributeType::Unknown => SyntheticValue::Null,
        }
    }

    /// Literal violating exactly the given rule, satisfying the others
    /// where possible.
    pub fn invalid_value_for(&mut self, kind: &RuleKind) -> SyntheticValue {
        match kind {
            RuleKind::Required => SyntheticValue::Null,
            RuleKind::RequiredNonBlank | RuleKind::RequiredNonEmpty => {
                SyntheticValue::Text(String::new())
            }
            RuleKind::LengthRange { max, .. } => {
                SyntheticValue::Text(self.lowercase_string(*max as usize + 1))
            }
            RuleKind::MinValue { value } => SyntheticValue::Int(value - 1),
            RuleKind::MaxValue { value } => SyntheticValue::Int(value + 1),
            RuleKind::EmailFormat => SyntheticValue::Text("invalid-email".to_string()),
            RuleKind::PatternMatch { pattern } => self.pattern_counterexample(pattern),
        }
    }

    /// Literal distinguishable from every other value produced for the
    /// attribute within this synthesizer's run, inside the length budget.
    pub fn unique_value(&mut self, attr: &AttributeModel) -> SyntheticValue {
        match attr.data_type {
            AttributeType::String if attr.is_email => SyntheticValue::Text(self.unique_email()),
            AttributeType::String => SyntheticValue::Text(self.unique_string(attr)),
            AttributeType::Integer | AttributeType::Long => {
                let token = self.next_token() as i64;
                let value = match (attr.min_value, attr.max_value) {
                    (Some(min), Some(max)) if min <= max => {
                        min + token.rem_euclid(max - min + 1)
                    }
                    (Some(min), None) => min + token,
                    _ => token,
                };
                SyntheticValue::Int(value)
            }
            _ => self.valid_value(attr),
        }
    }

    fn valid_string(&mut self, attr: &AttributeModel) -> String {
        self.lowercase_string(string_target_len(attr) as usize)
    }

    fn unique_string(&mut self, attr: &AttributeModel) -> String {
        let mut base = self.valid_string(attr);
        let mut k = self.options.suffix_len.max(1) as usize;
        let min = attr.min_length.unwrap_or(0) as usize;

        match attr.max_length {
            // A separator plus a one-char token needs a budget of three.
            Some(max) if max < 3 => return base,
            Some(max) if max <= SMALL_BUDGET => {
                let max = max as usize;
                k = k.min(max.saturating_sub(min).saturating_sub(1)).max(1);
                let budget = max.saturating_sub(1 + k).max(1);
                base.truncate(budget);
                if base.len() + 1 + k > max {
                    k = max.saturating_sub(base.len() + 1).max(1);
                }
            }
            Some(max) => {
                let max = max as usize;
                if base.len() + 1 + LARGE_SUFFIX_RESERVE > max {
                    let cut = (max - LARGE_SUFFIX_RESERVE).max(min.saturating_sub(1 + k));
                    base.truncate(cut);
                }
            }
            None => {}
        }

        let token = self.suffix_token(k);
        format!("{base}{sep}{token}", sep = self.options.separator)
    }

    fn unique_email(&mut self) -> String {
        format!("user{:06}@example.com", self.next_token())
    }

    fn pattern_counterexample(&mut self, pattern: &str) -> SyntheticValue {
        const CANDIDATES: [&str; 5] = ["", "!definitely-not-a-match!", "\u{1}\u{2}", "0", "zz"];
        match Regex::new(pattern) {
            Ok(re) => CANDIDATES
                .iter()
                .find(|candidate| !re.is_match(candidate))
                .map(|candidate| SyntheticValue::Text(candidate.to_string()))
                .unwrap_or(SyntheticValue::Null),
            Err(_) => SyntheticValue::Text("!definitely-not-a-match!".to_string()),
        }
    }

    fn lowercase_string(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| self.rng.gen_range(b'a'..=b'z') as char)
            .collect()
    }

    fn int_in(&mut self, attr: &AttributeModel, default_lo: i64, default_hi: i64) -> i64 {
        let lo = attr.min_value.unwrap_or(default_lo);
        let hi = attr.max_value.unwrap_or(default_hi).max(lo);
        self.rng.gen_range(lo..=hi)
    }

    fn float_in(&mut self, attr: &AttributeModel) -> f64 {
        let lo = attr.min_value.unwrap_or(1) as f64;
        let hi = (attr.max_value.unwrap_or(100) as f64).max(lo);
        self.rng.gen_range(lo..=hi)
    }

    fn next_token(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    fn suffix_token(&mut self, k: usize) -> String {
        let token = format!("{:08x}", self.next_token());
        token[token.len() - k.min(8)..].to_string()
    }
}

/// Target length for a valid string: 10 clamped into the declared bounds,
/// kept strictly inside them when there is room.
fn string_target_len(attr: &AttributeModel) -> u32 {
    match (attr.min_length, attr.max_length) {
        (Some(min), Some(max)) if min <= max => {
            let lo = min.saturating_add(1);
            let hi = max.saturating_sub(1);
            let target = if lo > hi {
                max
            } else {
                DEFAULT_STRING_LEN.clamp(lo, hi)
            };
            target.clamp(min, max)
        }
        (Some(min), _) => DEFAULT_STRING_LEN.max(min),
        (_, Some(max)) => DEFAULT_STRING_LEN.min(max),
        _ => DEFAULT_STRING_LEN,
    }
}
