use regex::Regex;
use std::sync::LazyLock;

macro_rules! pattern {
    ($name:ident, $regex_str:expr) => {
        pub(crate) static $name: LazyLock<Option<Regex>> =
            LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// headers
pattern!(
    NAME_HEADER,
    r"(?im)^[ \t]*(?:candidate|name|full[ \t]*name|applicant)(?:[ \t]*:|[ \t]+-[ \t])[ \t]*(.+)$"
);
pattern!(
    RESUME_OF_HEADER,
    r"(?im)^[ \t]*(?:resume[ \t]+of|cv[ \t]+of)[ \t]*[:\-]?[ \t]*(.+)$"
);
pattern!(
    ADDRESS_HEADER,
    r"(?im)^[ \t]*(?:address|location|residence)(?:[ \t]*:|[ \t]+-[ \t])[ \t]*(.*)$"
);

// contact details
pattern!(
    EMAIL,
    r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b"
);
pattern!(
    PHONE_INTERNATIONAL,
    r"(?:\+|\b00)\d{1,3}[\s\-]?\d{1,4}[\s\-]?\d{1,4}[\s\-]?\d{1,9}\b"
);
pattern!(PHONE_MOBILE_LOCAL, r"\b0\d{2}[\s\-]?\d{4}[\s\-]?\d{4}\b");
pattern!(PHONE_US, r"\b\d{3}[\s\-.]?\d{3}[\s\-.]?\d{4}\b");
pattern!(PHONE_LOCAL, r"\b\d{4}[\s\-]?\d{3}[\s\-]?\d{3}\b");
pattern!(PHONE_PARENTHESIZED, r"\(\d{3}\)\s*\d{3}[\s\-]?\d{4}\b");

// skills
pattern!(SKILL_TOKEN, r"[\w+#./\-]+");
pattern!(COMPOUND_CPP, r"(?i)\bc\+\+(?:$|[^\w+])");
pattern!(COMPOUND_CSHARP, r"(?i)\bc#(?:$|[^\w#])");
pattern!(COMPOUND_NODE, r"(?i)\bnode\.?js\b");
pattern!(COMPOUND_DOTNET, r"(?i)(?:^|[\s,;(/])(?:asp)?\.net\b");

// experience, in priority order
pattern!(
    YEARS_OF_EXPERIENCE,
    r"(?i)(\d+)\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)\b"
);
pattern!(
    EXPERIENCE_HEADER,
    r"(?i)experience\s*[:\-]\s*(\d+)\+?\s*(?:years?|yrs?)"
);
pattern!(YEARS_IN_FIELD, r"(?i)(\d+)\+?\s*(?:years?|yrs?)\s+in\s+\w+");
pattern!(
    TOTAL_YEARS,
    r"(?i)total\s*[:\-]?\s*(\d+)\+?\s*(?:years?|yrs?)"
);
pattern!(
    YEAR_RANGE,
    r"(?i)\b((?:19|20)\d{2})\s*(?:-|–|—|to)\s*((?:19|20)\d{2}|present|current|now)\b"
);

// education tiers
pattern!(
    DEGREE_DOCTORATE,
    r"(?i)\b(?:ph\.?\s?d|doctorate|doctoral)\b"
);
pattern!(
    DEGREE_MASTER,
    r"(?i)\b(?:master['’]?s\b|master\s+(?:of|in|degree)\b|m\.sc?\b|msc\b|mba\b|m\.a\.|m\.eng\b|meng\b|ms\b)"
);
// "MS Office" style products and the "Ms." honorific
pattern!(
    MS_NOT_A_DEGREE,
    r"(?i:\bms[ \t]+(?:office|word|excel|powerpoint|outlook|access|project|teams|visio|sql|azure|dynamics|dos)\b)|\bMs\.?[ \t]+\p{Lu}"
);
pattern!(
    DEGREE_BACHELOR,
    r"(?i)\b(?:bachelor['’]?s?\b|b\.sc?\b|bsc\b|bs\b|b\.a\.|ba\s+(?:in|of)\b|b\.?tech\b|b\.e\.|b\.eng\b|beng\b)"
);
pattern!(
    DEGREE_ASSOCIATE,
    r"(?i)\b(?:associate['’]?s\s+degree|associate['’]?s\b|associate\s+(?:degree|of)\b|a\.a\.|a\.s\.)"
);

// job records
pattern!(EXPERIENCE_RANGE, r"(?i)(\d+)\s*(?:-|–|—|to)\s*(\d+)");
pattern!(FIRST_NUMBER, r"(\d+)");

/// `true` when the pattern compiled and matches; a pattern that failed to compile never matches.
pub(crate) fn is_match(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}
