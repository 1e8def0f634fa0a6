//! Remaps raw analyzer feature values into the annotation vocabulary.
//! Each mapping passes unrecognized values through unchanged.

pub fn normalize_category(value: &str) -> &str {
    match value {
        "conj" | "neg" | "emph" => "avy",
        "prsg" => "psp",
        "p" => "pn",
        other => other,
    }
}

pub fn normalize_number(value: &str) -> &str {
    match value {
        "s" => "sg",
        "p" => "pl",
        other => other,
    }
}

pub fn normalize_person(value: &str) -> &str {
    match value {
        "u" => "1",
        "a" => "3",
        "m" | "m_h0" => "2",
        "m_h1" | "m_h2" => "2h",
        other => other,
    }
}
