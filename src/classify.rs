use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthBucket {
    Short,
    Medium,
    Long,
}

impl LengthBucket {
    /// Boundaries are exact: <12 short, 12..30 medium, >=30 long.
    pub fn from_line_count(line_count: usize) -> Self {
        if line_count < 12 {
            Self::Short
        } else if line_count < 30 {
            Self::Medium
        } else {
            Self::Long
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

/// Tags a poem with exactly two group labels: its author and its length
/// bucket. The tags are stored metadata; filtering and sorting never read
/// them.
pub fn classify(author: &str, line_count: usize) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();
    tags.insert(format!("author:{author}"));
    tags.insert(format!(
        "length:{}",
        LengthBucket::from_line_count(line_count).as_str()
    ));
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries_are_exact() {
        assert_eq!(LengthBucket::from_line_count(0), LengthBucket::Short);
        assert_eq!(LengthBucket::from_line_count(11), LengthBucket::Short);
        assert_eq!(LengthBucket::from_line_count(12), LengthBucket::Medium);
        assert_eq!(LengthBucket::from_line_count(29), LengthBucket::Medium);
        assert_eq!(LengthBucket::from_line_count(30), LengthBucket::Long);
        assert_eq!(LengthBucket::from_line_count(200), LengthBucket::Long);
    }

    #[test]
    fn classify_yields_exactly_two_tags() {
        let tags = classify("Unknown", 4);
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("author:Unknown"));
        assert!(tags.contains("length:short"));
    }

    #[test]
    fn classify_uses_the_bucket_of_the_count() {
        assert!(classify("A", 12).contains("length:medium"));
        assert!(classify("A", 30).contains("length:long"));
    }
}
