use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub fn format_mass_kg(kg: f64) -> String {
    let whole = kg.round() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if whole < 0 {
        format!("-{grouped} kg")
    } else {
        format!("{grouped} kg")
    }
}

pub fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

/// Same name, same slot, regardless of which other names are present.
pub fn stable_slot(name: &str, slots: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    (hasher.finish() % slots.max(1) as u64) as usize
}
