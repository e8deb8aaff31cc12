//! Resume content records.

/// Header block of the resume: identity, contact line, and summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResumeProfile {
    /// Full name as printed at the top of the resume.
    pub name: &'static str,
    /// Professional headline under the name.
    pub headline: &'static str,
    /// Phone number.
    pub phone: &'static str,
    /// Contact email address.
    pub email: &'static str,
    /// City and postal code.
    pub locality: &'static str,
    /// Italicized summary paragraph.
    pub summary: &'static str,
}

/// One professional experience entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Experience {
    /// Role title, uppercased in print.
    pub role: &'static str,
    /// Employer or initiative name.
    pub organization: &'static str,
    /// City/state or "Remote, United States".
    pub location: &'static str,
    /// Date span, e.g. "October 2020 - Present".
    pub span: &'static str,
    /// Bullet points describing the work.
    pub bullets: &'static [&'static str],
}

/// One education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Education {
    /// Degree or coursework title.
    pub degree: &'static str,
    /// Granting school.
    pub school: &'static str,
}
