//! Localized messages for conflict and bad request responses.
//!
//! The language is picked per request from the first `Accept-Language` entry. Unknown or
//! missing languages fall back to English.

/// Languages with a message set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

/// Message templates for one language.
///
/// Templates use `{reference}` and `{application}` placeholders.
#[derive(Debug)]
pub struct MessageSet {
    referenced_by: &'static str,
    referenced_by_other: &'static str,
    owner_of: &'static str,
    bad_request: &'static str,
}

static ENGLISH: MessageSet = MessageSet {
    referenced_by: "Cannot delete, referenced by {reference}",
    referenced_by_other: "Cannot delete, referenced by other data",
    owner_of: "Cannot delete, user is owner of {application}",
    bad_request: "Bad request",
};

static CHINESE: MessageSet = MessageSet {
    referenced_by: "无法删除，当前记录被 {reference} 引用",
    referenced_by_other: "无法删除，当前记录被其它数据引用",
    owner_of: "无法删除，用户在应用 {application} 中是所有者",
    bad_request: "请求错误",
};

fn interpolate(template: &str, key: &str, value: &str) -> String {
    template.replace(&format!("{{{key}}}"), value)
}

impl Language {
    /// Picks the language from an `Accept-Language` header value.
    ///
    /// Only the first comma-separated entry is considered. `zh-CN,en;q=0.9` selects
    /// Chinese, `fr` or a missing header selects English.
    pub fn from_accept_language(header: Option<&str>) -> Self {
        header
            .and_then(|value| value.split(',').next())
            .and_then(Self::from_tag)
            .unwrap_or_default()
    }

    /// Matches the primary subtag of a single language tag, ignoring case and `;q=` weights.
    fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.split(';').next().unwrap_or(tag).trim();
        let primary = tag.split(|c| c == '-' || c == '_').next().unwrap_or(tag);

        if primary.eq_ignore_ascii_case("en") {
            Some(Self::English)
        } else if primary.eq_ignore_ascii_case("zh") {
            Some(Self::Chinese)
        } else {
            None
        }
    }

    pub fn messages(self) -> &'static MessageSet {
        match self {
            Self::English => &ENGLISH,
            Self::Chinese => &CHINESE,
        }
    }
}

impl MessageSet {
    /// Message for a write rejected because another row references the target.
    ///
    /// An empty reference is treated as no reference.
    pub fn conflict(&self, reference: Option<&str>) -> String {
        match reference.filter(|reference| !reference.is_empty()) {
            Some(reference) => interpolate(self.referenced_by, "reference", reference),
            None => self.referenced_by_other.to_string(),
        }
    }

    /// Message for deleting a user that still owns the named application.
    pub fn owner_conflict(&self, application: &str) -> String {
        interpolate(self.owner_of, "application", application)
    }

    pub fn bad_request(&self) -> String {
        self.bad_request.to_string()
    }
}
