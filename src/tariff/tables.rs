//! Static tariff tables from the official Attorney Tariff (Sl. glasnik RS).
//!
//! The tables are fixed at compile time and keyed by locale only for their
//! display labels; the fee amounts are identical in both languages.

use super::FeeStructure;
use crate::locale::Locale;

/// A criminal-procedure tier, bucketed by threatened statutory penalty.
#[derive(Debug, Clone, Copy)]
pub struct CriminalTier {
    pub id: &'static str,
    label_en: &'static str,
    label_sr: &'static str,
    pub fees: FeeStructure,
}

impl CriminalTier {
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.label_en,
            Locale::Sr => self.label_sr,
        }
    }
}

/// A case type with a fixed base fee independent of the value in controversy.
#[derive(Debug, Clone, Copy)]
pub struct NonAssessableCategory {
    pub id: &'static str,
    label_en: &'static str,
    label_sr: &'static str,
    pub base: u64,
}

impl NonAssessableCategory {
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.label_en,
            Locale::Sr => self.label_sr,
        }
    }
}

const fn fees(submission: u64, hearing: u64, appeal: u64) -> FeeStructure {
    FeeStructure {
        submission,
        hearing,
        appeal,
    }
}

/// Six tiers ordered by increasing penalty severity.
pub const CRIMINAL_TIERS: [CriminalTier; 6] = [
    CriminalTier {
        id: "opt1",
        label_en: "Fine or imprisonment up to 3 years",
        label_sr: "Novčana kazna ili zatvor do 3 godine",
        fees: fees(30_000, 35_000, 60_000),
    },
    CriminalTier {
        id: "opt2",
        label_en: "Imprisonment over 3 to 5 years",
        label_sr: "Zatvor preko 3 do 5 godina",
        fees: fees(37_500, 42_500, 75_000),
    },
    CriminalTier {
        id: "opt3",
        label_en: "Imprisonment over 5 to 10 years",
        label_sr: "Zatvor preko 5 do 10 godina",
        fees: fees(50_000, 55_000, 100_000),
    },
    CriminalTier {
        id: "opt4",
        label_en: "Imprisonment over 10 to 15 years",
        label_sr: "Zatvor preko 10 do 15 godina",
        fees: fees(75_000, 80_000, 150_000),
    },
    CriminalTier {
        id: "opt5",
        label_en: "Imprisonment over 15 years",
        label_sr: "Zatvor preko 15 godina",
        fees: fees(100_000, 105_000, 200_000),
    },
    CriminalTier {
        id: "opt6",
        label_en: "30-40 years / Life Imprisonment",
        label_sr: "30-40 godina / Doživotni zatvor",
        fees: fees(125_000, 130_000, 250_000),
    },
];

/// Six non-assessable categories with their base fees.
pub const NON_ASSESSABLE_CATEGORIES: [NonAssessableCategory; 6] = [
    NonAssessableCategory {
        id: "vanparnicni_licna",
        label_en: "Non-contentious - Personal Status",
        label_sr: "Vanparnični - Lična stanja",
        base: 27_500,
    },
    NonAssessableCategory {
        id: "vanparnicni_porodicni",
        label_en: "Non-contentious - Family Relations",
        label_sr: "Vanparnični - Porodični odnosi",
        base: 27_500,
    },
    NonAssessableCategory {
        id: "vanparnicni_imovinski",
        label_en: "Non-contentious - Property Relations",
        label_sr: "Vanparnični - Imovinski odnosi",
        base: 50_000,
    },
    NonAssessableCategory {
        id: "katastar",
        label_en: "Real Estate Cadastre Registration",
        label_sr: "Upis u Katastar nepokretnosti",
        base: 27_500,
    },
    NonAssessableCategory {
        id: "stecaj",
        label_en: "Bankruptcy and Liquidation",
        label_sr: "Stečajni i likvidacioni postupak",
        base: 42_500,
    },
    NonAssessableCategory {
        id: "upravni_poreski",
        label_en: "Administrative - Tax, Customs, Interior",
        label_sr: "Upravni - Poreski, Carinski, MUP",
        base: 50_000,
    },
];

pub fn find_criminal_tier(id: &str) -> Option<&'static CriminalTier> {
    CRIMINAL_TIERS.iter().find(|t| t.id == id)
}

pub fn find_non_assessable_category(id: &str) -> Option<&'static NonAssessableCategory> {
    NON_ASSESSABLE_CATEGORIES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_have_six_entries() {
        assert_eq!(CRIMINAL_TIERS.len(), 6);
        assert_eq!(NON_ASSESSABLE_CATEGORIES.len(), 6);
    }

    #[test]
    fn test_tier_ids_are_unique() {
        for (i, a) in CRIMINAL_TIERS.iter().enumerate() {
            for b in &CRIMINAL_TIERS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_tiers_ordered_by_severity() {
        for pair in CRIMINAL_TIERS.windows(2) {
            assert!(pair[0].fees.submission < pair[1].fees.submission);
        }
    }

    #[test]
    fn test_labels_localized() {
        let tier = find_criminal_tier("opt1").unwrap();
        assert_eq!(tier.label(Locale::En), "Fine or imprisonment up to 3 years");
        assert_eq!(tier.label(Locale::Sr), "Novčana kazna ili zatvor do 3 godine");
    }

    #[test]
    fn test_lookup_miss() {
        assert!(find_criminal_tier("opt7").is_none());
        assert!(find_non_assessable_category("nepostojeci").is_none());
    }
}
