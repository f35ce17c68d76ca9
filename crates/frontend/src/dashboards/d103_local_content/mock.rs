use contracts::portal::local_content::LocalContentPlan;

fn plan(
    company: &str,
    local_spend: f64,
    total_spend: f64,
    target_percent: f64,
    local_staff: u32,
    total_staff: u32,
) -> LocalContentPlan {
    LocalContentPlan {
        company: company.to_string(),
        period: "2024 H1".to_string(),
        local_spend,
        total_spend,
        target_percent,
        local_staff,
        total_staff,
    }
}

pub fn plans() -> Vec<LocalContentPlan> {
    vec![
        plan("Tullow Ghana Ltd", 182_400_000.0, 310_000_000.0, 50.0, 412, 520),
        plan("Eni Ghana E&P", 96_000_000.0, 240_000_000.0, 50.0, 288, 410),
        plan("Kosmos Energy Ghana", 74_500_000.0, 130_000_000.0, 45.0, 190, 236),
        plan("Springfield E&P", 12_800_000.0, 18_000_000.0, 60.0, 64, 70),
        plan("Schlumberger Ghana", 21_000_000.0, 66_000_000.0, 40.0, 155, 230),
    ]
}
