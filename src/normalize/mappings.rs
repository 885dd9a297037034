//! Canonical enum vocabularies and their alias tables
//!
//! One mapping per enum column of the CRM schema. Aliases cover the English
//! synonyms and the Greek translations seen in agency spreadsheets; Greek
//! entries appear both accented and unaccented because imports mix the two
//! freely. Lookup folds case only, so every variant is spelled out here.

use super::EnumMapping;
use std::sync::OnceLock;

static PROPERTY_TYPE: OnceLock<EnumMapping> = OnceLock::new();

pub fn property_type() -> &'static EnumMapping {
    PROPERTY_TYPE.get_or_init(|| {
        EnumMapping::build(
            "propertyType",
            &[
                "APARTMENT",
                "STUDIO",
                "MAISONETTE",
                "DETACHED_HOUSE",
                "VILLA",
                "BUILDING",
                "OFFICE",
                "RETAIL",
                "WAREHOUSE",
                "LAND",
                "PARKING",
            ],
            &[
                ("apartment", "APARTMENT"),
                ("flat", "APARTMENT"),
                ("apt", "APARTMENT"),
                ("διαμέρισμα", "APARTMENT"),
                ("διαμερισμα", "APARTMENT"),
                ("studio", "STUDIO"),
                ("bedsit", "STUDIO"),
                ("γκαρσονιέρα", "STUDIO"),
                ("γκαρσονιερα", "STUDIO"),
                ("στούντιο", "STUDIO"),
                ("στουντιο", "STUDIO"),
                ("maisonette", "MAISONETTE"),
                ("duplex", "MAISONETTE"),
                ("μεζονέτα", "MAISONETTE"),
                ("μεζονετα", "MAISONETTE"),
                ("detached house", "DETACHED_HOUSE"),
                ("house", "DETACHED_HOUSE"),
                ("single family house", "DETACHED_HOUSE"),
                ("μονοκατοικία", "DETACHED_HOUSE"),
                ("μονοκατοικια", "DETACHED_HOUSE"),
                ("villa", "VILLA"),
                ("βίλα", "VILLA"),
                ("βιλα", "VILLA"),
                ("βίλλα", "VILLA"),
                ("βιλλα", "VILLA"),
                ("building", "BUILDING"),
                ("apartment building", "BUILDING"),
                ("block of flats", "BUILDING"),
                ("κτίριο", "BUILDING"),
                ("κτιριο", "BUILDING"),
                ("πολυκατοικία", "BUILDING"),
                ("πολυκατοικια", "BUILDING"),
                ("office", "OFFICE"),
                ("office space", "OFFICE"),
                ("γραφείο", "OFFICE"),
                ("γραφειο", "OFFICE"),
                ("retail", "RETAIL"),
                ("shop", "RETAIL"),
                ("store", "RETAIL"),
                ("κατάστημα", "RETAIL"),
                ("καταστημα", "RETAIL"),
                ("μαγαζί", "RETAIL"),
                ("μαγαζι", "RETAIL"),
                ("warehouse", "WAREHOUSE"),
                ("storage", "WAREHOUSE"),
                ("αποθήκη", "WAREHOUSE"),
                ("αποθηκη", "WAREHOUSE"),
                ("land", "LAND"),
                ("plot", "LAND"),
                ("parcel", "LAND"),
                ("οικόπεδο", "LAND"),
                ("οικοπεδο", "LAND"),
                ("αγροτεμάχιο", "LAND"),
                ("αγροτεμαχιο", "LAND"),
                ("parking", "PARKING"),
                ("parking spot", "PARKING"),
                ("garage", "PARKING"),
                ("πάρκινγκ", "PARKING"),
                ("παρκινγκ", "PARKING"),
                ("γκαράζ", "PARKING"),
                ("γκαραζ", "PARKING"),
                ("θέση στάθμευσης", "PARKING"),
                ("θεση σταθμευσης", "PARKING"),
            ],
        )
    })
}

static PROPERTY_STATUS: OnceLock<EnumMapping> = OnceLock::new();

pub fn property_status() -> &'static EnumMapping {
    PROPERTY_STATUS.get_or_init(|| {
        EnumMapping::build(
            "propertyStatus",
            &[
                "AVAILABLE",
                "UNDER_OFFER",
                "RESERVED",
                "SOLD",
                "RENTED",
                "WITHDRAWN",
            ],
            &[
                ("available", "AVAILABLE"),
                ("active", "AVAILABLE"),
                ("on the market", "AVAILABLE"),
                ("διαθέσιμο", "AVAILABLE"),
                ("διαθεσιμο", "AVAILABLE"),
                ("ενεργό", "AVAILABLE"),
                ("ενεργο", "AVAILABLE"),
                ("under offer", "UNDER_OFFER"),
                ("offer pending", "UNDER_OFFER"),
                ("υπό προσφορά", "UNDER_OFFER"),
                ("υπο προσφορα", "UNDER_OFFER"),
                ("σε διαπραγμάτευση", "UNDER_OFFER"),
                ("σε διαπραγματευση", "UNDER_OFFER"),
                ("reserved", "RESERVED"),
                ("δεσμευμένο", "RESERVED"),
                ("δεσμευμενο", "RESERVED"),
                ("κρατημένο", "RESERVED"),
                ("κρατημενο", "RESERVED"),
                ("sold", "SOLD"),
                ("πωλήθηκε", "SOLD"),
                ("πωληθηκε", "SOLD"),
                ("πουλημένο", "SOLD"),
                ("πουλημενο", "SOLD"),
                ("rented", "RENTED"),
                ("leased", "RENTED"),
                ("ενοικιάστηκε", "RENTED"),
                ("ενοικιαστηκε", "RENTED"),
                ("ενοικιασμένο", "RENTED"),
                ("ενοικιασμενο", "RENTED"),
                ("μισθωμένο", "RENTED"),
                ("μισθωμενο", "RENTED"),
                ("withdrawn", "WITHDRAWN"),
                ("off market", "WITHDRAWN"),
                ("αποσύρθηκε", "WITHDRAWN"),
                ("αποσυρθηκε", "WITHDRAWN"),
                ("εκτός αγοράς", "WITHDRAWN"),
                ("εκτος αγορας", "WITHDRAWN"),
            ],
        )
    })
}

static TRANSACTION_TYPE: OnceLock<EnumMapping> = OnceLock::new();

pub fn transaction_type() -> &'static EnumMapping {
    TRANSACTION_TYPE.get_or_init(|| {
        EnumMapping::build(
            "transactionType",
            &["SALE", "RENT"],
            &[
                ("sale", "SALE"),
                ("sell", "SALE"),
                ("for sale", "SALE"),
                ("purchase", "SALE"),
                ("buy", "SALE"),
                ("πώληση", "SALE"),
                ("πωληση", "SALE"),
                ("αγορά", "SALE"),
                ("αγορα", "SALE"),
                ("rent", "RENT"),
                ("rental", "RENT"),
                ("lease", "RENT"),
                ("let", "RENT"),
                ("for rent", "RENT"),
                ("ενοικίαση", "RENT"),
                ("ενοικιαση", "RENT"),
                ("μίσθωση", "RENT"),
                ("μισθωση", "RENT"),
                ("ενοίκιο", "RENT"),
                ("ενοικιο", "RENT"),
            ],
        )
    })
}

static HEATING_TYPE: OnceLock<EnumMapping> = OnceLock::new();

pub fn heating_type() -> &'static EnumMapping {
    HEATING_TYPE.get_or_init(|| {
        EnumMapping::build(
            "heatingType",
            &["NONE", "CENTRAL", "AUTONOMOUS", "AIR_CONDITION", "UNDERFLOOR"],
            &[
                ("none", "NONE"),
                ("no heating", "NONE"),
                ("χωρίς θέρμανση", "NONE"),
                ("χωρις θερμανση", "NONE"),
                ("καμία", "NONE"),
                ("καμια", "NONE"),
                ("central", "CENTRAL"),
                ("central heating", "CENTRAL"),
                ("κεντρική", "CENTRAL"),
                ("κεντρικη", "CENTRAL"),
                ("κεντρική θέρμανση", "CENTRAL"),
                ("κεντρικη θερμανση", "CENTRAL"),
                ("autonomous", "AUTONOMOUS"),
                ("individual", "AUTONOMOUS"),
                ("independent", "AUTONOMOUS"),
                ("αυτόνομη", "AUTONOMOUS"),
                ("αυτονομη", "AUTONOMOUS"),
                ("αυτόνομη θέρμανση", "AUTONOMOUS"),
                ("αυτονομη θερμανση", "AUTONOMOUS"),
                ("ατομική", "AUTONOMOUS"),
                ("ατομικη", "AUTONOMOUS"),
                ("air condition", "AIR_CONDITION"),
                ("air conditioning", "AIR_CONDITION"),
                ("ac", "AIR_CONDITION"),
                ("a/c", "AIR_CONDITION"),
                ("κλιματισμός", "AIR_CONDITION"),
                ("κλιματισμος", "AIR_CONDITION"),
                ("κλιματιστικό", "AIR_CONDITION"),
                ("κλιματιστικο", "AIR_CONDITION"),
                ("underfloor", "UNDERFLOOR"),
                ("floor heating", "UNDERFLOOR"),
                ("ενδοδαπέδια", "UNDERFLOOR"),
                ("ενδοδαπεδια", "UNDERFLOOR"),
                ("ενδοδαπέδια θέρμανση", "UNDERFLOOR"),
                ("ενδοδαπεδια θερμανση", "UNDERFLOOR"),
            ],
        )
    })
}

static ENERGY_CLASS: OnceLock<EnumMapping> = OnceLock::new();

pub fn energy_class() -> &'static EnumMapping {
    ENERGY_CLASS.get_or_init(|| {
        EnumMapping::build(
            "energyClass",
            &[
                "A_PLUS", "A", "B_PLUS", "B", "C", "D", "E", "F", "G", "EXEMPT",
            ],
            &[
                // Greek certificates label the classes Α+, Α, Β+, Β, Γ, Δ, Ε, Ζ, Η
                ("a+", "A_PLUS"),
                ("a plus", "A_PLUS"),
                ("α+", "A_PLUS"),
                ("a", "A"),
                ("α", "A"),
                ("b+", "B_PLUS"),
                ("b plus", "B_PLUS"),
                ("β+", "B_PLUS"),
                ("b", "B"),
                ("β", "B"),
                ("c", "C"),
                ("γ", "C"),
                ("d", "D"),
                ("δ", "D"),
                ("e", "E"),
                ("ε", "E"),
                ("f", "F"),
                ("ζ", "F"),
                ("g", "G"),
                ("η", "G"),
                ("exempt", "EXEMPT"),
                ("not required", "EXEMPT"),
                ("εξαιρείται", "EXEMPT"),
                ("εξαιρειται", "EXEMPT"),
            ],
        )
    })
}

static CONDITION: OnceLock<EnumMapping> = OnceLock::new();

pub fn condition() -> &'static EnumMapping {
    CONDITION.get_or_init(|| {
        EnumMapping::build(
            "condition",
            &[
                "NEW_BUILD",
                "RENOVATED",
                "GOOD",
                "NEEDS_RENOVATION",
                "UNDER_CONSTRUCTION",
            ],
            &[
                ("new", "NEW_BUILD"),
                ("new build", "NEW_BUILD"),
                ("newly built", "NEW_BUILD"),
                ("νεόδμητο", "NEW_BUILD"),
                ("νεοδμητο", "NEW_BUILD"),
                ("καινούργιο", "NEW_BUILD"),
                ("καινουργιο", "NEW_BUILD"),
                ("νεόκτιστο", "NEW_BUILD"),
                ("νεοκτιστο", "NEW_BUILD"),
                ("renovated", "RENOVATED"),
                ("refurbished", "RENOVATED"),
                ("ανακαινισμένο", "RENOVATED"),
                ("ανακαινισμενο", "RENOVATED"),
                ("good", "GOOD"),
                ("good condition", "GOOD"),
                ("very good", "GOOD"),
                ("καλή κατάσταση", "GOOD"),
                ("καλη κατασταση", "GOOD"),
                ("πολύ καλή", "GOOD"),
                ("πολυ καλη", "GOOD"),
                ("needs renovation", "NEEDS_RENOVATION"),
                ("fixer upper", "NEEDS_RENOVATION"),
                ("to renovate", "NEEDS_RENOVATION"),
                ("χρήζει ανακαίνισης", "NEEDS_RENOVATION"),
                ("χρηζει ανακαινισης", "NEEDS_RENOVATION"),
                ("για ανακαίνιση", "NEEDS_RENOVATION"),
                ("για ανακαινιση", "NEEDS_RENOVATION"),
                ("under construction", "UNDER_CONSTRUCTION"),
                ("υπό κατασκευή", "UNDER_CONSTRUCTION"),
                ("υπο κατασκευη", "UNDER_CONSTRUCTION"),
                ("ημιτελές", "UNDER_CONSTRUCTION"),
                ("ημιτελες", "UNDER_CONSTRUCTION"),
            ],
        )
    })
}

static FURNISHED: OnceLock<EnumMapping> = OnceLock::new();

pub fn furnished() -> &'static EnumMapping {
    FURNISHED.get_or_init(|| {
        EnumMapping::build(
            "furnished",
            &["FURNISHED", "PARTIALLY_FURNISHED", "UNFURNISHED"],
            &[
                ("furnished", "FURNISHED"),
                ("fully furnished", "FURNISHED"),
                // Spreadsheet exports turn checkbox columns into booleans
                ("yes", "FURNISHED"),
                ("true", "FURNISHED"),
                ("επιπλωμένο", "FURNISHED"),
                ("επιπλωμενο", "FURNISHED"),
                ("πλήρως επιπλωμένο", "FURNISHED"),
                ("πληρως επιπλωμενο", "FURNISHED"),
                ("ναι", "FURNISHED"),
                ("partially furnished", "PARTIALLY_FURNISHED"),
                ("partly furnished", "PARTIALLY_FURNISHED"),
                ("semi furnished", "PARTIALLY_FURNISHED"),
                ("μερικώς επιπλωμένο", "PARTIALLY_FURNISHED"),
                ("μερικως επιπλωμενο", "PARTIALLY_FURNISHED"),
                ("ημιεπιπλωμένο", "PARTIALLY_FURNISHED"),
                ("ημιεπιπλωμενο", "PARTIALLY_FURNISHED"),
                ("unfurnished", "UNFURNISHED"),
                ("not furnished", "UNFURNISHED"),
                ("no", "UNFURNISHED"),
                ("false", "UNFURNISHED"),
                ("μη επιπλωμένο", "UNFURNISHED"),
                ("μη επιπλωμενο", "UNFURNISHED"),
                ("χωρίς έπιπλα", "UNFURNISHED"),
                ("χωρις επιπλα", "UNFURNISHED"),
                ("άδειο", "UNFURNISHED"),
                ("αδειο", "UNFURNISHED"),
                ("όχι", "UNFURNISHED"),
                ("οχι", "UNFURNISHED"),
            ],
        )
    })
}

static PRICE_TYPE: OnceLock<EnumMapping> = OnceLock::new();

pub fn price_type() -> &'static EnumMapping {
    PRICE_TYPE.get_or_init(|| {
        EnumMapping::build(
            "priceType",
            &["FIXED", "NEGOTIABLE", "ON_REQUEST"],
            &[
                ("fixed", "FIXED"),
                ("firm", "FIXED"),
                ("σταθερή", "FIXED"),
                ("σταθερη", "FIXED"),
                ("τελική", "FIXED"),
                ("τελικη", "FIXED"),
                ("negotiable", "NEGOTIABLE"),
                ("open to offers", "NEGOTIABLE"),
                ("συζητήσιμη", "NEGOTIABLE"),
                ("συζητησιμη", "NEGOTIABLE"),
                ("διαπραγματεύσιμη", "NEGOTIABLE"),
                ("διαπραγματευσιμη", "NEGOTIABLE"),
                ("on request", "ON_REQUEST"),
                ("upon request", "ON_REQUEST"),
                ("κατόπιν επικοινωνίας", "ON_REQUEST"),
                ("κατοπιν επικοινωνιας", "ON_REQUEST"),
                ("κατόπιν ζήτησης", "ON_REQUEST"),
                ("κατοπιν ζητησης", "ON_REQUEST"),
            ],
        )
    })
}

static VISIBILITY: OnceLock<EnumMapping> = OnceLock::new();

pub fn visibility() -> &'static EnumMapping {
    VISIBILITY.get_or_init(|| {
        EnumMapping::build(
            "visibility",
            &["PUBLIC", "UNLISTED", "PRIVATE"],
            &[
                ("public", "PUBLIC"),
                ("published", "PUBLIC"),
                ("visible", "PUBLIC"),
                ("δημόσιο", "PUBLIC"),
                ("δημοσιο", "PUBLIC"),
                ("δημοσιευμένο", "PUBLIC"),
                ("δημοσιευμενο", "PUBLIC"),
                ("unlisted", "UNLISTED"),
                ("link only", "UNLISTED"),
                ("μη δημοσιευμένο", "UNLISTED"),
                ("μη δημοσιευμενο", "UNLISTED"),
                ("με σύνδεσμο", "UNLISTED"),
                ("με συνδεσμο", "UNLISTED"),
                ("private", "PRIVATE"),
                ("internal", "PRIVATE"),
                ("office only", "PRIVATE"),
                ("ιδιωτικό", "PRIVATE"),
                ("ιδιωτικο", "PRIVATE"),
                ("εσωτερικό", "PRIVATE"),
                ("εσωτερικο", "PRIVATE"),
                ("μόνο γραφείο", "PRIVATE"),
                ("μονο γραφειο", "PRIVATE"),
            ],
        )
    })
}

static PRIVACY_LEVEL: OnceLock<EnumMapping> = OnceLock::new();

pub fn privacy_level() -> &'static EnumMapping {
    PRIVACY_LEVEL.get_or_init(|| {
        EnumMapping::build(
            "privacyLevel",
            &["EXACT_ADDRESS", "STREET_ONLY", "AREA_ONLY", "HIDDEN"],
            &[
                ("exact address", "EXACT_ADDRESS"),
                ("full address", "EXACT_ADDRESS"),
                ("ακριβής διεύθυνση", "EXACT_ADDRESS"),
                ("ακριβης διευθυνση", "EXACT_ADDRESS"),
                ("πλήρης διεύθυνση", "EXACT_ADDRESS"),
                ("πληρης διευθυνση", "EXACT_ADDRESS"),
                ("street only", "STREET_ONLY"),
                ("street", "STREET_ONLY"),
                ("μόνο οδός", "STREET_ONLY"),
                ("μονο οδος", "STREET_ONLY"),
                ("μόνο δρόμος", "STREET_ONLY"),
                ("μονο δρομος", "STREET_ONLY"),
                ("area only", "AREA_ONLY"),
                ("neighborhood only", "AREA_ONLY"),
                ("μόνο περιοχή", "AREA_ONLY"),
                ("μονο περιοχη", "AREA_ONLY"),
                ("μόνο γειτονιά", "AREA_ONLY"),
                ("μονο γειτονια", "AREA_ONLY"),
                ("hidden", "HIDDEN"),
                ("no address", "HIDDEN"),
                ("κρυφή", "HIDDEN"),
                ("κρυφη", "HIDDEN"),
                ("χωρίς διεύθυνση", "HIDDEN"),
                ("χωρις διευθυνση", "HIDDEN"),
            ],
        )
    })
}

static LEGALIZATION_STATUS: OnceLock<EnumMapping> = OnceLock::new();

pub fn legalization_status() -> &'static EnumMapping {
    LEGALIZATION_STATUS.get_or_init(|| {
        EnumMapping::build(
            "legalizationStatus",
            &["LEGAL", "SETTLED", "PENDING_SETTLEMENT", "UNSETTLED"],
            &[
                ("legal", "LEGAL"),
                ("fully legal", "LEGAL"),
                ("νόμιμο", "LEGAL"),
                ("νομιμο", "LEGAL"),
                // Settled under the building-amnesty law 4495/2017
                ("settled", "SETTLED"),
                ("legalized", "SETTLED"),
                ("regularized", "SETTLED"),
                ("τακτοποιημένο", "SETTLED"),
                ("τακτοποιημενο", "SETTLED"),
                ("νομιμοποιημένο", "SETTLED"),
                ("νομιμοποιημενο", "SETTLED"),
                ("ν.4495", "SETTLED"),
                ("ν4495", "SETTLED"),
                ("4495", "SETTLED"),
                ("pending settlement", "PENDING_SETTLEMENT"),
                ("in progress", "PENDING_SETTLEMENT"),
                ("σε τακτοποίηση", "PENDING_SETTLEMENT"),
                ("σε τακτοποιηση", "PENDING_SETTLEMENT"),
                ("υπό τακτοποίηση", "PENDING_SETTLEMENT"),
                ("υπο τακτοποιηση", "PENDING_SETTLEMENT"),
                ("σε εξέλιξη", "PENDING_SETTLEMENT"),
                ("σε εξελιξη", "PENDING_SETTLEMENT"),
                ("unsettled", "UNSETTLED"),
                ("not settled", "UNSETTLED"),
                ("αυθαίρετο", "UNSETTLED"),
                ("αυθαιρετο", "UNSETTLED"),
                ("ατακτοποίητο", "UNSETTLED"),
                ("ατακτοποιητο", "UNSETTLED"),
                ("μη τακτοποιημένο", "UNSETTLED"),
                ("μη τακτοποιημενο", "UNSETTLED"),
            ],
        )
    })
}

static CLIENT_TYPE: OnceLock<EnumMapping> = OnceLock::new();

pub fn client_type() -> &'static EnumMapping {
    CLIENT_TYPE.get_or_init(|| {
        EnumMapping::build(
            "clientType",
            &["INDIVIDUAL", "COMPANY", "BROKER"],
            &[
                ("individual", "INDIVIDUAL"),
                ("person", "INDIVIDUAL"),
                ("private", "INDIVIDUAL"),
                ("ιδιώτης", "INDIVIDUAL"),
                ("ιδιωτης", "INDIVIDUAL"),
                ("φυσικό πρόσωπο", "INDIVIDUAL"),
                ("φυσικο προσωπο", "INDIVIDUAL"),
                ("company", "COMPANY"),
                ("business", "COMPANY"),
                ("legal entity", "COMPANY"),
                ("εταιρεία", "COMPANY"),
                ("εταιρεια", "COMPANY"),
                ("εταιρία", "COMPANY"),
                ("εταιρια", "COMPANY"),
                ("νομικό πρόσωπο", "COMPANY"),
                ("νομικο προσωπο", "COMPANY"),
                ("broker", "BROKER"),
                ("agent", "BROKER"),
                ("realtor", "BROKER"),
                ("colleague", "BROKER"),
                ("μεσίτης", "BROKER"),
                ("μεσιτης", "BROKER"),
                ("συνάδελφος", "BROKER"),
                ("συναδελφος", "BROKER"),
                ("συνεργάτης", "BROKER"),
                ("συνεργατης", "BROKER"),
            ],
        )
    })
}

static CLIENT_STATUS: OnceLock<EnumMapping> = OnceLock::new();

pub fn client_status() -> &'static EnumMapping {
    CLIENT_STATUS.get_or_init(|| {
        EnumMapping::build(
            "clientStatus",
            &["LEAD", "ACTIVE", "INACTIVE", "ARCHIVED"],
            &[
                ("lead", "LEAD"),
                ("new lead", "LEAD"),
                ("prospect", "LEAD"),
                ("υποψήφιος", "LEAD"),
                ("υποψηφιος", "LEAD"),
                ("δυνητικός", "LEAD"),
                ("δυνητικος", "LEAD"),
                ("active", "ACTIVE"),
                ("ενεργός", "ACTIVE"),
                ("ενεργος", "ACTIVE"),
                ("ενεργή", "ACTIVE"),
                ("ενεργη", "ACTIVE"),
                ("inactive", "INACTIVE"),
                ("dormant", "INACTIVE"),
                ("paused", "INACTIVE"),
                ("ανενεργός", "INACTIVE"),
                ("ανενεργος", "INACTIVE"),
                ("σε παύση", "INACTIVE"),
                ("σε παυση", "INACTIVE"),
                ("archived", "ARCHIVED"),
                ("closed", "ARCHIVED"),
                ("αρχειοθετημένος", "ARCHIVED"),
                ("αρχειοθετημενος", "ARCHIVED"),
                ("κλειστός", "ARCHIVED"),
                ("κλειστος", "ARCHIVED"),
            ],
        )
    })
}

static CLIENT_INTENT: OnceLock<EnumMapping> = OnceLock::new();

pub fn client_intent() -> &'static EnumMapping {
    CLIENT_INTENT.get_or_init(|| {
        EnumMapping::build(
            "clientIntent",
            &["BUY", "RENT", "SELL", "LET"],
            &[
                ("buy", "BUY"),
                ("buyer", "BUY"),
                ("purchase", "BUY"),
                ("looking to buy", "BUY"),
                ("αγορά", "BUY"),
                ("αγορα", "BUY"),
                ("αγοραστής", "BUY"),
                ("αγοραστης", "BUY"),
                ("rent", "RENT"),
                ("renter", "RENT"),
                ("tenant", "RENT"),
                ("looking to rent", "RENT"),
                ("ενοικίαση", "RENT"),
                ("ενοικιαση", "RENT"),
                ("ενοικιαστής", "RENT"),
                ("ενοικιαστης", "RENT"),
                ("μίσθωση", "RENT"),
                ("μισθωση", "RENT"),
                ("sell", "SELL"),
                ("seller", "SELL"),
                ("vendor", "SELL"),
                ("πώληση", "SELL"),
                ("πωληση", "SELL"),
                ("πωλητής", "SELL"),
                ("πωλητης", "SELL"),
                ("let", "LET"),
                ("landlord", "LET"),
                ("lessor", "LET"),
                ("to let", "LET"),
                ("εκμίσθωση", "LET"),
                ("εκμισθωση", "LET"),
                ("εκμισθωτής", "LET"),
                ("εκμισθωτης", "LET"),
            ],
        )
    })
}

static PROPERTY_FIELDS: OnceLock<Vec<(&'static str, &'static EnumMapping)>> = OnceLock::new();

/// Property import row fields that carry enum values, in schema order
pub fn property_enum_mappings() -> &'static [(&'static str, &'static EnumMapping)] {
    PROPERTY_FIELDS
        .get_or_init(|| {
            vec![
                ("propertyType", property_type()),
                ("transactionType", transaction_type()),
                ("status", property_status()),
                ("heatingType", heating_type()),
                ("energyClass", energy_class()),
                ("condition", condition()),
                ("furnished", furnished()),
                ("priceType", price_type()),
                ("visibility", visibility()),
                ("privacyLevel", privacy_level()),
                ("legalizationStatus", legalization_status()),
            ]
        })
        .as_slice()
}

static CLIENT_FIELDS: OnceLock<Vec<(&'static str, &'static EnumMapping)>> = OnceLock::new();

/// Client import row fields that carry enum values
pub fn client_enum_mappings() -> &'static [(&'static str, &'static EnumMapping)] {
    CLIENT_FIELDS
        .get_or_init(|| {
            vec![
                ("clientType", client_type()),
                ("status", client_status()),
                ("intent", client_intent()),
            ]
        })
        .as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_type_accepts_both_languages() {
        let mapping = transaction_type();
        assert_eq!(mapping.normalize("for sale"), Some("SALE"));
        assert_eq!(mapping.normalize("Πώληση"), Some("SALE"));
        assert_eq!(mapping.normalize("ΕΝΟΙΚΙΑΣΗ"), Some("RENT"));
        assert_eq!(mapping.normalize("lease"), Some("RENT"));
    }

    #[test]
    fn test_energy_class_maps_greek_certificate_labels() {
        let mapping = energy_class();
        assert_eq!(mapping.normalize("Α+"), Some("A_PLUS"));
        assert_eq!(mapping.normalize("β+"), Some("B_PLUS"));
        assert_eq!(mapping.normalize("Ζ"), Some("F"));
        assert_eq!(mapping.normalize("η"), Some("G"));
        assert_eq!(mapping.normalize("B_PLUS"), Some("B_PLUS"));
    }

    #[test]
    fn test_heating_accepts_descriptive_phrases() {
        let mapping = heating_type();
        assert_eq!(mapping.normalize("Αυτόνομη θέρμανση"), Some("AUTONOMOUS"));
        assert_eq!(mapping.normalize("a/c"), Some("AIR_CONDITION"));
        assert_eq!(mapping.normalize("χωρις θερμανση"), Some("NONE"));
    }

    #[test]
    fn test_legalization_accepts_law_references() {
        let mapping = legalization_status();
        assert_eq!(mapping.normalize("Ν.4495"), Some("SETTLED"));
        assert_eq!(mapping.normalize("4495"), Some("SETTLED"));
        assert_eq!(mapping.normalize("αυθαίρετο"), Some("UNSETTLED"));
    }

    #[test]
    fn test_client_vocabularies_cover_roles() {
        assert_eq!(client_type().normalize("Μεσίτης"), Some("BROKER"));
        assert_eq!(client_intent().normalize("αγοραστής"), Some("BUY"));
        assert_eq!(client_intent().normalize("landlord"), Some("LET"));
        assert_eq!(client_status().normalize("σε παύση"), Some("INACTIVE"));
    }

    #[test]
    fn test_registries_expose_every_field_once() {
        let mut property_fields: Vec<&str> =
            property_enum_mappings().iter().map(|(f, _)| *f).collect();
        property_fields.sort_unstable();
        property_fields.dedup();
        assert_eq!(property_fields.len(), property_enum_mappings().len());

        let mut client_fields: Vec<&str> =
            client_enum_mappings().iter().map(|(f, _)| *f).collect();
        client_fields.sort_unstable();
        client_fields.dedup();
        assert_eq!(client_fields.len(), client_enum_mappings().len());
    }
}
