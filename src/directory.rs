//! The static therapist directory and its pagination.
//!
//! The directory is fixed at startup and never mutated; `page` hands out
//! contiguous windows of it. Out-of-range pages are empty, not errors.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// One therapist listing. Field names match the wire format exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TherapistRecord {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub experience_years: u32,
    pub consultation_fee: u32,
    pub clinic_location: String,
    pub rating_percentage: u8,
    pub reviews_count: u32,
}

/// A read-only, ordered collection of therapist records.
#[derive(Debug, Clone)]
pub struct Directory {
    records: Vec<TherapistRecord>,
}

/// One page of the directory plus the totals needed for page navigation.
#[derive(Debug, Clone)]
pub struct DirectoryPage {
    pub records: Vec<TherapistRecord>,
    pub total: usize,
    pub total_pages: u64,
}

impl Directory {
    pub fn new(records: Vec<TherapistRecord>) -> Self {
        Self { records }
    }

    /// The built-in directory shipped with the service.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_RECORDS.clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TherapistRecord] {
        &self.records
    }

    /// Returns the records within `[(page-1)*per_page, page*per_page)`.
    ///
    /// Both arguments must be >= 1; the caller validates that. Offsets are
    /// computed with saturating arithmetic so absurd page numbers behave as
    /// out-of-range (an empty page) rather than overflowing.
    pub fn page(&self, page: u64, per_page: u64) -> DirectoryPage {
        debug_assert!(page >= 1 && per_page >= 1);

        let total = self.records.len();
        let total_pages = (total as u64).div_ceil(per_page);

        let start = (page - 1).saturating_mul(per_page);
        let end = start.saturating_add(per_page);
        let start = usize::try_from(start).unwrap_or(usize::MAX);
        let end = usize::try_from(end).unwrap_or(usize::MAX);

        let records = if start >= total {
            Vec::new()
        } else {
            self.records[start..end.min(total)].to_vec()
        };

        DirectoryPage {
            records,
            total,
            total_pages,
        }
    }
}

fn record(
    id: &str,
    name: &str,
    specialization: &str,
    experience_years: u32,
    consultation_fee: u32,
    clinic_location: &str,
    rating_percentage: u8,
    reviews_count: u32,
) -> TherapistRecord {
    TherapistRecord {
        id: id.to_string(),
        name: name.to_string(),
        specialization: specialization.to_string(),
        experience_years,
        consultation_fee,
        clinic_location: clinic_location.to_string(),
        rating_percentage,
        reviews_count,
    }
}

lazy_static! {
    // The listing as provided; id 11 was never assigned.
    static ref BUILTIN_RECORDS: Vec<TherapistRecord> = vec![
        record("1", "Dr. Sneha Sharma", "Psychotherapist", 12, 1500, "Delhi", 100, 29),
        record("2", "Ms. Harvinder Kaur", "Psychotherapist", 23, 2999, "Delhi", 100, 167),
        record("3", "Ms. Tejasvini Sinha", "Neuropsychologist", 9, 1000, "Vasant Vihar, Delhi", 98, 183),
        record("4", "Dr. D.Senthil Kumar", "Counselling Psychologist", 24, 600, "Chennai", 94, 145),
        record("5", "Dr. Anju Soni", "Counselling Psychologist", 11, 1400, "Chennai", 100, 83),
        record("6", "Ms. Rupal Jain", "Psychologist", 11, 1000, "Mumbai", 99, 71),
        record("7", "Dr. Harshant Upadhyaya", "Psychologist", 19, 3000, "Mumbai", 97, 51),
        record("8", "Ms. Rashi Laskari", "Psychologist", 15, 1800, "Mumbai", 98, 90),
        record("9", "Ms. Mithila Desai", "Psychologist", 36, 2850, "Mumbai", 93, 95),
        record("10", "Dr. Keerti Sachdeva", "Psychologist", 39, 2000, "Mumbai", 87, 35),
        record("12", "Ms. Riddhi Sagar", "Psychologist", 11, 2000, "Mumbai", 98, 57),
        record("13", "Dr. Naazneen Ladak", "Psychologist", 18, 2000, "Mumbai", 91, 178),
        record("14", "Dr. Dharmendra Solanki", "Psychologist", 21, 2500, "Mumbai", 97, 69),
        record("15", "Ms. Mansi D Chheda", "Psychologist", 11, 3000, "Mumbai", 99, 166),
        record("16", "Ms. Purvi Palvia", "Psychologist", 7, 2100, "Mumbai", 95, 40),
        record("17", "Ms. Hema Sampath", "Counselling Psychologist", 18, 2000, "Bangalore", 87, 178),
        record("18", "Ms. Monisha Preetha", "Counselling Psychologist", 3, 1300, "Bangalore", 100, 35),
        record("19", "Dr. Prashanthi K.", "Counselling Psychologist", 16, 1499, "Bangalore", 95, 47),
        record("20", "Mr. Chetan Manjalekar", "Counselling Psychologist", 8, 1200, "Bangalore", 96, 42),
        record("21", "Ms. Navya Sree Nambiar", "Counselling Psychologist", 7, 1500, "Bangalore", 96, 13),
        record("22", "Dr. Shabana M S (PhD)", "Counselling Psychologist", 15, 2500, "Bangalore", 100, 2),
        record("23", "Ms. Ayana Sunil Variar", "Counselling Psychologist", 8, 1500, "Bangalore", 100, 11),
        record("24", "Ms. Shruti Chaubey", "Counselling Psychologist", 9, 1900, "Bangalore", 100, 38),
        record("25", "Dr. Chaya", "Counselling Psychologist", 19, 1500, "Bangalore", 97, 188),
        record("26", "Ms. Sheetal N Chauhan", "Counselling Psychologist", 8, 1500, "Bangalore", 92, 17),
        record("27", "Dr. Priya G", "Psychologist", 12, 2500, "Bangalore", 95, 60),
        record("28", "Dr. Sumit Soni", "Psychotherapist", 9, 1200, "Kolkata", 90, 53),
        record("29", "Ms. Priya Verma", "Psychotherapist", 5, 1500, "Delhi", 88, 24),
        record("30", "Dr. Ananya Banerjee", "Counseling Psychologist", 8, 2200, "Kolkata", 94, 65),
        record("31", "Dr. Vaibhav Kapoor", "Psychiatrist", 15, 1800, "Delhi", 96, 71),
        record("32", "Ms. Rashmi Tripathi", "Counselling Psychologist", 7, 2500, "Gurugram", 93, 33),
    ];
}
