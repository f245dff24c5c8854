use anyhow::Context;
use clap::Parser;
use rehab_core::chart::axis_ratio;
use rehab_core::{
    all_profiles, axis_ticks, ChartConfig, ChartData, DashboardConfig, DashboardError,
    DashboardSession, DashboardSurface, ProfileKey, ScheduleEntry, StatusCard,
};

#[derive(Parser, Debug)]
#[command(
    name = "rehab-cli",
    about = "Hiển thị hồ sơ phục hồi chức năng dưới dạng văn bản."
)]
struct Args {
    /// Các hồ sơ cần hiển thị theo thứ tự (mild, moderate, severe).
    profiles: Vec<String>,

    /// Độ rộng tối đa của cột biểu đồ, tính bằng ký tự.
    #[arg(short, long, default_value_t = 40)]
    width: usize,

    /// In cả ba hồ sơ dưới dạng JSON.
    #[arg(long)]
    json: bool,
}

/// Biểu đồ thanh ngang vẽ bằng ký tự.
struct TextChart {
    config: ChartConfig,
    width: usize,
    rows: Vec<String>,
}

impl TextChart {
    fn new(config: ChartConfig, width: usize, data: &ChartData) -> Self {
        let mut chart = Self {
            config,
            width,
            rows: Vec::new(),
        };
        chart.redraw(data);
        chart
    }

    fn redraw(&mut self, data: &ChartData) {
        let label_width = data.labels.iter().map(String::len).max().unwrap_or(0);
        self.rows = data
            .pairs()
            .map(|(label, value)| {
                let len = (axis_ratio(&self.config, value) * self.width as f64).round() as usize;
                format!(
                    "{label:>label_width$} |{bar:<width$}| {value}",
                    bar = "#".repeat(len),
                    width = self.width
                )
            })
            .collect();

        let ticks = axis_ticks(&self.config);
        let first = ticks.first().copied().unwrap_or(self.config.axis_min);
        let last = ticks.last().copied().unwrap_or(self.config.axis_max);
        let first = first.to_string();
        self.rows.push(format!(
            "{:label_width$}  {first}{last:>pad$}",
            "",
            pad = self.width.saturating_sub(first.len())
        ));
    }
}

#[derive(Default)]
struct TextSurface {
    width: usize,
    status: Vec<String>,
    plan: Vec<String>,
}

impl DashboardSurface for TextSurface {
    type Chart = TextChart;

    fn apply_status(&mut self, status: &StatusCard) -> Result<(), DashboardError> {
        self.status = vec![
            format!("[{}]", status.class_name()),
            status.label.to_string(),
            status.summary.to_string(),
        ];
        Ok(())
    }

    fn replace_plan(&mut self, entries: &[ScheduleEntry]) -> Result<(), DashboardError> {
        self.plan = entries.iter().map(|entry| format!("  - {entry}")).collect();
        Ok(())
    }

    fn create_chart(
        &mut self,
        config: &ChartConfig,
        data: &ChartData,
    ) -> Result<TextChart, DashboardError> {
        Ok(TextChart::new(config.clone(), self.width, data))
    }

    fn update_chart(&mut self, chart: &mut TextChart, data: ChartData) -> Result<(), DashboardError> {
        chart.redraw(&data);
        Ok(())
    }
}

fn screen(session: &DashboardSession<TextSurface>) -> String {
    let surface = session.surface();
    let mut lines = surface.status.clone();
    lines.push(String::new());
    lines.push("Weekly plan:".to_string());
    lines.extend(surface.plan.iter().cloned());
    lines.push(String::new());
    lines.push(format!("{}:", session.chart_config().dataset_label));
    if let Some(chart) = session.chart() {
        lines.extend(chart.rows.iter().cloned());
    }
    lines.join("\n")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.json {
        let json = serde_json::to_string_pretty(&all_profiles())
            .context("Không serialize được hồ sơ")?;
        println!("{json}");
        return Ok(());
    }

    let keys = if args.profiles.is_empty() {
        vec![DashboardConfig::default().initial_profile]
    } else {
        args.profiles
            .iter()
            .map(|key| key.parse::<ProfileKey>())
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut session = DashboardSession::new(TextSurface {
        width: args.width.max(10),
        ..TextSurface::default()
    });

    for key in keys {
        session
            .show(key)
            .with_context(|| format!("Không hiển thị được hồ sơ {key}"))?;
        println!("{}\n", screen(&session));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rehab_core::{get_profile, TherapyHours};

    #[test]
    fn bars_scale_against_fixed_axis() {
        let data = ChartData::from_hours(&[
            TherapyHours {
                discipline: rehab_core::Discipline::Physical,
                hours: 5.0,
            },
            TherapyHours {
                discipline: rehab_core::Discipline::Speech,
                hours: 14.0,
            },
        ]);
        let chart = TextChart::new(ChartConfig::therapy_hours(), 20, &data);

        assert_eq!(chart.rows[0].matches('#').count(), 10);
        assert_eq!(chart.rows[1].matches('#').count(), 20);
        assert!(chart.rows[2].trim_end().ends_with("10"));
    }

    #[test]
    fn screen_lists_status_plan_and_chart() {
        let mut session = DashboardSession::new(TextSurface {
            width: 20,
            ..TextSurface::default()
        });
        session.show(ProfileKey::Severe).expect("Vẽ thất bại");
        let text = screen(&session);

        assert!(text.contains("[card status-severe]"));
        assert!(text.contains(get_profile(ProfileKey::Severe).summary));
        assert!(text.contains("  - Mon: Physical Therapy (AM), Speech Therapy (PM)"));
        assert!(text.contains("Hours per Week:"));
        assert_eq!(session.chart().map(|chart| chart.rows.len()), Some(4));
    }
}
