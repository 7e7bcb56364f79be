//! Sample members, units and the fixed reference date.

use chrono::NaiveDate;
use roster_types::{Member, OrganizationUnit, Role, UnitKind, UnitRef};
use uuid::Uuid;

/// Reference "today" used across the test suite: 2026-08-01.
///
/// Every sample birth date falls in January–June, so sample ages are simply
/// `2026 - birth_year` as of this date.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
}

/// The three sample congregations: Central (headquarters), Northside and
/// Riverside (branches). Ids are stable across runs.
pub fn sample_units() -> Vec<OrganizationUnit> {
    vec![
        OrganizationUnit {
            id: Uuid::from_u128(0xa1),
            name: "Central".to_string(),
            kind: UnitKind::Headquarters,
        },
        OrganizationUnit {
            id: Uuid::from_u128(0xa2),
            name: "Northside".to_string(),
            kind: UnitKind::Branch,
        },
        OrganizationUnit {
            id: Uuid::from_u128(0xa3),
            name: "Riverside".to_string(),
            kind: UnitKind::Branch,
        },
    ]
}

/// Builder for one-off member records.
pub struct MemberBuilder {
    id: Uuid,
    full_name: String,
    birth_date: NaiveDate,
    role: Role,
    national_id: String,
    unit: Option<UnitRef>,
}

impl MemberBuilder {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: full_name.into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            role: Role::Member,
            national_id: "000.000.000-00".to_string(),
            unit: None,
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn born(mut self, year: i32, month: u32, day: u32) -> Self {
        self.birth_date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn national_id(mut self, national_id: impl Into<String>) -> Self {
        self.national_id = national_id.into();
        self
    }

    pub fn unit(mut self, unit: &OrganizationUnit) -> Self {
        self.unit = Some(unit.to_ref());
        self
    }

    pub fn build(self) -> Member {
        Member {
            id: self.id,
            full_name: self.full_name,
            birth_date: self.birth_date,
            role: self.role,
            national_id: self.national_id,
            unit: self.unit,
        }
    }
}

/// Shorthand for a unitless member.
pub fn member(name: &str, year: i32, month: u32, day: u32, role: Role) -> Member {
    MemberBuilder::new(name).born(year, month, day).role(role).build()
}

/// Shorthand for a member attached to `unit`.
pub fn member_of_unit(
    name: &str,
    year: i32,
    month: u32,
    day: u32,
    role: Role,
    unit: &OrganizationUnit,
) -> Member {
    MemberBuilder::new(name)
        .born(year, month, day)
        .role(role)
        .unit(unit)
        .build()
}

/// Fixed 25-member congregation used by the scenario tests.
///
/// As of [`fixed_today`]:
/// - roles: 13 Member, 7 Leader, 5 Pastor
/// - units: Central 12, Northside 8, Riverside 4, one member without a unit
/// - age brackets: 3 under 18, 7 in 18-29, 8 in 30-49, 4 in 50-64, 3 over 65
/// - ages sum to 964 (mean 38.56)
pub fn sample_roster() -> Vec<Member> {
    let units = sample_units();
    let central = &units[0];
    let northside = &units[1];
    let riverside = &units[2];

    let rows: Vec<(&str, i32, u32, u32, Role, Option<&OrganizationUnit>, &str)> = vec![
        ("Maria Silva", 1999, 3, 12, Role::Member, Some(central), "123.456.789-09"),
        ("João Souza", 1991, 5, 20, Role::Leader, Some(central), "482.915.637-20"),
        ("Ana Oliveira", 2003, 2, 14, Role::Member, Some(northside), "390.174.825-61"),
        ("Carlos Pereira", 1963, 4, 2, Role::Pastor, Some(central), "718.203.594-46"),
        ("Fernanda Lima", 1986, 1, 25, Role::Leader, Some(riverside), "265.830.917-73"),
        ("Pedro Santos", 2014, 6, 30, Role::Member, Some(central), "831.642.075-18"),
        ("Juliana Costa", 1997, 5, 9, Role::Member, Some(northside), "574.019.283-92"),
        ("Rafael Almeida", 1978, 3, 17, Role::Leader, Some(central), "906.385.142-07"),
        ("Beatriz Rocha", 2005, 4, 21, Role::Member, Some(riverside), "147.820.369-54"),
        ("Marcos Ribeiro", 1955, 2, 11, Role::Pastor, Some(central), "629.517.408-31"),
        ("Camila Martins", 1993, 6, 3, Role::Member, Some(northside), "083.294.651-87"),
        ("Lucas Carvalho", 2010, 1, 19, Role::Member, Some(central), "352.768.914-29"),
        ("Patrícia Gomes", 1971, 3, 28, Role::Leader, Some(northside), "795.041.836-65"),
        ("Gustavo Barbosa", 1983, 5, 14, Role::Member, Some(central), "410.693.257-90"),
        ("Larissa Araújo", 2007, 2, 6, Role::Member, Some(riverside), "268.135.479-04"),
        ("Roberto Dias", 1946, 6, 24, Role::Pastor, Some(central), "537.902.816-42"),
        ("Aline Moreira", 1988, 4, 10, Role::Leader, Some(northside), "614.287.350-78"),
        ("Thiago Cardoso", 2000, 3, 5, Role::Member, Some(central), "920.456.173-85"),
        ("Sônia Teixeira", 1968, 5, 30, Role::Member, Some(northside), "178.529.604-13"),
        ("Felipe Nunes", 2018, 2, 27, Role::Member, Some(central), "843.071.962-50"),
        ("Renata Freitas", 1981, 6, 16, Role::Leader, Some(riverside), "306.918.745-26"),
        ("Antônio Moura", 1959, 1, 8, Role::Pastor, Some(central), "751.384.290-69"),
        ("Débora Castro", 2002, 4, 4, Role::Member, Some(northside), "492.607.138-37"),
        ("Eduardo Pinto", 1974, 5, 22, Role::Pastor, None, "904.618.322-80"),
        ("Vanessa Ramos", 1995, 2, 18, Role::Leader, Some(northside), "586.230.471-14"),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, year, month, day, role, unit, national_id))| {
            let mut builder = MemberBuilder::new(name)
                .id(Uuid::from_u128(i as u128 + 1))
                .born(year, month, day)
                .role(role)
                .national_id(national_id);
            if let Some(unit) = unit {
                builder = builder.unit(unit);
            }
            builder.build()
        })
        .collect()
}
