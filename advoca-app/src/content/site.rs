//! Site-wide identity strings shared by the hero, header, and footer.

pub const NAME: &str = "ROBERT A. SANCHEZ";
pub const CREDENTIALS: &str = "ROBERT A. SANCHEZ, MPS";
pub const HEADLINE: &str = "Patient Advocate & Clinical Social Interviewer";
pub const FOOTER_TAGLINE: &str = "Patient Advocate & Health Equity Advocate";
pub const HERO_CTA: &str = "Start Your Journey";
pub const HERO_PORTRAIT: &str = "rob-blue.webp";

pub const EMAIL: &str = "robertp.sanchez@outlook.com";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/robsanchez124/";

pub const COPYRIGHT_HOLDER: &str = "Robert A. Sanchez";
