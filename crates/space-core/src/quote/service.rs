//! Selectable values of the quote form: services, budgets, referral sources.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Service a client can request a quote for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    Frontend,
    FullStack,
    #[serde(rename = "AIDL")]
    Aidl,
    #[serde(rename = "IEEE")]
    Ieee,
    Training,
    Custom,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::Frontend,
        ServiceKind::FullStack,
        ServiceKind::Aidl,
        ServiceKind::Ieee,
        ServiceKind::Training,
        ServiceKind::Custom,
    ];

    /// Form value stored in the draft.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceKind::Frontend => "Frontend",
            ServiceKind::FullStack => "FullStack",
            ServiceKind::Aidl => "AIDL",
            ServiceKind::Ieee => "IEEE",
            ServiceKind::Training => "Training",
            ServiceKind::Custom => "Custom",
        }
    }

    /// Text shown in the service dropdown.
    pub fn option_label(&self) -> &'static str {
        match self {
            ServiceKind::Frontend => "Frontend Website Development",
            ServiceKind::FullStack => "Full Stack Development (Web/App)",
            ServiceKind::Aidl => "AI/Deep Learning Model",
            ServiceKind::Ieee => "IEEE Paper Implementation/Support",
            ServiceKind::Training => "Corporate/Student Training",
            ServiceKind::Custom => "Custom Project Development",
        }
    }

    /// Name used in the quote email.
    pub fn email_label(&self) -> &'static str {
        match self {
            ServiceKind::Frontend => "Frontend Website Development",
            ServiceKind::FullStack => "Full Stack Development",
            ServiceKind::Aidl => "AI/Deep Learning Project",
            ServiceKind::Ieee => "IEEE Paper Implementation",
            ServiceKind::Training => "Corporate/Student Training",
            ServiceKind::Custom => "Custom Project Development",
        }
    }

    /// Shorter name used in the WhatsApp message.
    pub fn whatsapp_label(&self) -> &'static str {
        match self {
            ServiceKind::Frontend => "Frontend Development",
            ServiceKind::FullStack => "Full Stack Development",
            ServiceKind::Aidl => "AI/ML Project",
            ServiceKind::Ieee => "IEEE Paper Support",
            ServiceKind::Training => "Training/Workshop",
            ServiceKind::Custom => "Custom Development",
        }
    }

    /// Indicative price band shown while the client fills the form.
    pub fn estimate(&self) -> PriceEstimate {
        let (min, max) = match self {
            ServiceKind::Frontend => (15_000, 50_000),
            ServiceKind::FullStack => (50_000, 150_000),
            ServiceKind::Aidl => (80_000, 200_000),
            ServiceKind::Ieee => (30_000, 80_000),
            ServiceKind::Training => (10_000, 50_000),
            ServiceKind::Custom => (40_000, 150_000),
        };
        PriceEstimate { min, max }
    }
}

impl FromStr for ServiceKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or(())
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Price band in Indian rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub min: u64,
    pub max: u64,
}

impl PriceEstimate {
    pub const CURRENCY: &'static str = "₹";
}

impl fmt::Display for PriceEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{cur}{} - {cur}{}",
            format_inr(self.min),
            format_inr(self.max),
            cur = Self::CURRENCY
        )
    }
}

/// Group digits the Indian way: last three, then pairs (`1,50,000`).
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Budget band picked on step 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetRange {
    Under50k,
    From50kTo150k,
    From150kTo300k,
    Above300k,
    Flexible,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 5] = [
        BudgetRange::Under50k,
        BudgetRange::From50kTo150k,
        BudgetRange::From150kTo300k,
        BudgetRange::Above300k,
        BudgetRange::Flexible,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            BudgetRange::Under50k => "<50k",
            BudgetRange::From50kTo150k => "50k-150k",
            BudgetRange::From150kTo300k => "150k-300k",
            BudgetRange::Above300k => "300k+",
            BudgetRange::Flexible => "flexible",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::Under50k => "Under ₹50,000",
            BudgetRange::From50kTo150k => "₹50,000 - ₹1,50,000",
            BudgetRange::From150kTo300k => "₹1,50,000 - ₹3,00,000",
            BudgetRange::Above300k => "Above ₹3,00,000",
            BudgetRange::Flexible => "Flexible / Needs Discussion",
        }
    }
}

impl FromStr for BudgetRange {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BudgetRange::ALL
            .into_iter()
            .find(|b| b.code() == s)
            .ok_or(())
    }
}

/// "How did you hear about us" answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferralSource {
    Google,
    LinkedIn,
    Referral,
    Social,
    Other,
}

impl ReferralSource {
    pub const ALL: [ReferralSource; 5] = [
        ReferralSource::Google,
        ReferralSource::LinkedIn,
        ReferralSource::Referral,
        ReferralSource::Social,
        ReferralSource::Other,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ReferralSource::Google => "Google",
            ReferralSource::LinkedIn => "LinkedIn",
            ReferralSource::Referral => "Referral",
            ReferralSource::Social => "Social",
            ReferralSource::Other => "Other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReferralSource::Google => "Google Search",
            ReferralSource::LinkedIn => "LinkedIn",
            ReferralSource::Referral => "Friend/Colleague Referral",
            ReferralSource::Social => "Social Media",
            ReferralSource::Other => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_codes_roundtrip() {
        for kind in ServiceKind::ALL {
            assert_eq!(kind.code().parse::<ServiceKind>(), Ok(kind));
        }
        assert!("frontend".parse::<ServiceKind>().is_err());
        assert!("".parse::<ServiceKind>().is_err());
    }

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(0), "0");
        assert_eq!(format_inr(999), "999");
        assert_eq!(format_inr(15_000), "15,000");
        assert_eq!(format_inr(150_000), "1,50,000");
        assert_eq!(format_inr(2_000_000), "20,00,000");
        assert_eq!(format_inr(12_345_678), "1,23,45,678");
    }

    #[test]
    fn test_estimate_display() {
        assert_eq!(
            ServiceKind::FullStack.estimate().to_string(),
            "₹50,000 - ₹1,50,000"
        );
        assert_eq!(ServiceKind::Ieee.estimate().to_string(), "₹30,000 - ₹80,000");
    }

    #[test]
    fn test_budget_codes() {
        assert_eq!("50k-150k".parse::<BudgetRange>(), Ok(BudgetRange::From50kTo150k));
        assert_eq!("300k+".parse::<BudgetRange>(), Ok(BudgetRange::Above300k));
        assert!("lots".parse::<BudgetRange>().is_err());
    }
}
