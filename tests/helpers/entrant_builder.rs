// ==========================================
// Entrant builder - engine tests
// ==========================================

use pool_planner::domain::Entrant;

pub struct EntrantBuilder {
    entrant: Entrant,
}

impl EntrantBuilder {
    pub fn new(full_name: &str) -> Self {
        Self {
            entrant: Entrant {
                license_number: String::new(),
                full_name: full_name.to_string(),
                date_of_birth: "1.1.2011".to_string(),
                club: "Oslo TF".to_string(),
                category: "13-14".to_string(),
            },
        }
    }

    pub fn club(mut self, club: &str) -> Self {
        self.entrant.club = club.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.entrant.category = category.to_string();
        self
    }

    pub fn license(mut self, license: &str) -> Self {
        self.entrant.license_number = license.to_string();
        self
    }

    pub fn build(self) -> Entrant {
        self.entrant
    }
}

/// `count` entrants of one club and category, named "<club> <n>"
pub fn club_entrants(club: &str, category: &str, count: usize) -> Vec<Entrant> {
    (1..=count)
        .map(|n| {
            EntrantBuilder::new(&format!("{} {}", club, n))
                .club(club)
                .category(category)
                .build()
        })
        .collect()
}

/// Mixed field over several clubs and every default category
pub fn mixed_field() -> Vec<Entrant> {
    let mut entrants = Vec::new();
    let clubs = [
        ("Oslo TF", 3),
        ("Bergen TK", 5),
        ("Trondheim TF", 2),
        ("Stavanger TF", 4),
        ("Tromsø TK", 1),
        ("Asker TF", 6),
        ("Bodø TK", 2),
    ];
    let categories = ["rekrutt", "13-14", "15-16", "17-18", "senior"];
    for (i, (club, size)) in clubs.iter().enumerate() {
        for (j, category) in categories.iter().enumerate() {
            // vary the club size per category so pools are uneven
            let count = (size + i + j) % 5 + 1;
            entrants.extend(club_entrants(club, category, count).into_iter().map(|mut e| {
                e.full_name = format!("{} {}", e.full_name, category);
                e
            }));
        }
    }
    entrants
}
