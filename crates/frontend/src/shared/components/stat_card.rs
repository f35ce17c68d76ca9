use crate::shared::icons::icon;
use crate::shared::number_format::{format_compact, format_number_with_decimals, format_percent};
use contracts::portal::stats::{DashboardStat, IndicatorStatus, ValueFormat};
use leptos::prelude::*;

fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => format!("{} {}", currency, format_compact(val)),
        ValueFormat::Percent { decimals } => format_percent(val, *decimals),
        ValueFormat::Integer => format_number_with_decimals(val, 0),
    }
}

fn status_class(status: IndicatorStatus) -> &'static str {
    match status {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    }
}

#[component]
pub fn StatCard(stat: DashboardStat) -> impl IntoView {
    let change_view = stat.change_percent.map(|pct| {
        let (arrow, cls) = if pct > 0.5 {
            ("\u{2191}", "stat-card__change stat-card__change--up")
        } else if pct < -0.5 {
            ("\u{2193}", "stat-card__change stat-card__change--down")
        } else {
            ("", "stat-card__change stat-card__change--flat")
        };
        view! { <span class=cls>{format!("{}{:.1}%", arrow, pct.abs())}</span> }
    });

    view! {
        <div class=status_class(stat.status)>
            <div class="stat-card__icon">
                {icon(&stat.icon)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{stat.label.clone()}</div>
                <div class="stat-card__value">
                    {format_value(stat.value, &stat.format)}
                    {change_view}
                </div>
            </div>
        </div>
    }
}

/// Row of stat cards at the top of a dashboard
#[component]
pub fn StatGrid(stats: Vec<DashboardStat>) -> impl IntoView {
    view! {
        <div class="stat-grid">
            {stats.into_iter().map(|stat| view! { <StatCard stat=stat /> }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1240.0, &ValueFormat::Integer), "1,240");
        assert_eq!(format_value(72.26, &ValueFormat::Percent { decimals: 1 }), "72.3%");
        assert_eq!(
            format_value(4_760_000.0, &ValueFormat::Money { currency: "USD".into() }),
            "USD 4.8M"
        );
    }
}
