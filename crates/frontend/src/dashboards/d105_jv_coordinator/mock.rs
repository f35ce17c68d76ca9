use contracts::portal::joint_ventures::{JointVenture, JvPartner, JvStatus};

fn venture(
    name: &str,
    block: &str,
    operator: &str,
    partners: &[(&str, f64)],
    status: JvStatus,
) -> JointVenture {
    JointVenture {
        name: name.to_string(),
        block: block.to_string(),
        operator: operator.to_string(),
        partners: partners
            .iter()
            .map(|(name, stake)| JvPartner {
                name: name.to_string(),
                stake_percent: *stake,
            })
            .collect(),
        status,
    }
}

pub fn ventures() -> Vec<JointVenture> {
    vec![
        venture(
            "Jubilee Unit",
            "West Cape Three Points / Deepwater Tano",
            "Tullow Ghana Ltd",
            &[
                ("Tullow", 38.98),
                ("Kosmos", 38.57),
                ("PetroSA", 2.72),
                ("GNPC", 19.73),
            ],
            JvStatus::Production,
        ),
        venture(
            "OCTP",
            "Offshore Cape Three Points",
            "Eni Ghana E&P",
            &[("Eni", 44.44), ("Vitol", 35.56), ("GNPC", 20.0)],
            JvStatus::Production,
        ),
        venture(
            "Pecan Field",
            "Deepwater Tano / Cape Three Points",
            "Aker Energy Ghana",
            &[("Aker Energy", 50.0), ("Lukoil", 38.0), ("GNPC", 10.0)],
            JvStatus::Development,
        ),
        venture(
            "Shallow Water Tano",
            "SWT Block",
            "Erin Energy Ghana",
            &[("Erin Energy", 60.0), ("GNPC", 15.0), ("Base Energy", 25.0)],
            JvStatus::Suspended,
        ),
        venture(
            "Block 2 Expro",
            "Offshore Cape Three Points South",
            "Springfield E&P",
            &[("Springfield", 84.0), ("GNPC", 16.0)],
            JvStatus::Exploration,
        ),
    ]
}
