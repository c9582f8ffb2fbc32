use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;
use yew_hooks::use_interval;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SalesPoint {
    pub year: i32,
    pub value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: f64,
    pub suffix: &'static str,
}

pub const SALES: [SalesPoint; 7] = [
    SalesPoint { year: 2019, value: 120.0 },
    SalesPoint { year: 2020, value: 150.0 },
    SalesPoint { year: 2021, value: 210.0 },
    SalesPoint { year: 2022, value: 280.0 },
    SalesPoint { year: 2023, value: 360.0 },
    SalesPoint { year: 2024, value: 450.0 },
    SalesPoint { year: 2025, value: 560.0 },
];

pub const STATS: [Stat; 4] = [
    Stat { label: "Happy Customers", value: 1200.0, suffix: "+" },
    Stat { label: "Top Rated on FoodZone", value: 4.9, suffix: "⭐" },
    Stat { label: "Pizza Varieties", value: 32.0, suffix: "+" },
    Stat { label: "Cheese Melted / year", value: 2.0, suffix: " tons" },
];

const COUNT_UP_MS: u32 = 1000;
const DEEP_RED: RGBColor = RGBColor(193, 51, 39);

/// Top of the y axis: 20% headroom over the largest value, never below 1.2.
pub fn chart_ceiling(points: &[SalesPoint]) -> f64 {
    let largest = points.iter().map(|p| p.value).fold(0.0, f64::max);
    largest.max(1.0) * 1.2
}

pub fn year_bounds(points: &[SalesPoint]) -> Option<(i32, i32)> {
    let first = points.iter().map(|p| p.year).min()?;
    let last = points.iter().map(|p| p.year).max()?;
    Some((first, last.max(first + 1)))
}

/// Steps a displayed number from zero up to its target on a fixed tick.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: f64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: f64, duration_ms: u32) -> Self {
        let step = f64::from(Self::tick_ms(duration_ms));
        let ticks = (f64::from(duration_ms) / step).max(1.0);
        Self {
            target,
            increment: target / ticks,
            current: 0.0,
            done: target <= 0.0,
        }
    }

    pub fn tick_ms(duration_ms: u32) -> u32 {
        (duration_ms / 60).max(16)
    }

    pub fn tick(&mut self) -> f64 {
        if !self.done {
            self.current += self.increment;
            if self.current >= self.target {
                self.done = true;
            }
        }
        self.value()
    }

    pub fn value(&self) -> f64 {
        if self.done {
            self.target
        } else {
            self.current.round()
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Interval handed to `use_interval`; zero stops it.
fn count_up_interval(running: bool) -> u32 {
    if running {
        CountUp::tick_ms(COUNT_UP_MS)
    } else {
        0
    }
}

pub fn format_stat(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn draw_sales(canvas: HtmlCanvasElement, points: &[SalesPoint]) -> Result<(), String> {
    let Some((first_year, last_year)) = year_bounds(points) else {
        return Ok(());
    };

    canvas.set_width(720);
    canvas.set_height(320);
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(|e| format!("{:?}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Yearly Sales Growth", ("sans-serif", 20))
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(first_year..last_year, 0.0..chart_ceiling(points))
        .map_err(|e| format!("{:?}", e))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(points.len())
        .x_label_formatter(&|year| year.to_string())
        .draw()
        .map_err(|e| format!("{:?}", e))?;

    chart
        .draw_series(
            AreaSeries::new(points.iter().map(|p| (p.year, p.value)), 0.0, DEEP_RED.mix(0.2))
                .border_style(DEEP_RED.stroke_width(2)),
        )
        .map_err(|e| format!("{:?}", e))?;

    chart
        .draw_series(points.iter().map(|p| Circle::new((p.year, p.value), 4, DEEP_RED.filled())))
        .map_err(|e| format!("{:?}", e))?;

    root.present().map_err(|e| format!("{:?}", e))
}

#[function_component]
pub fn SalesChart() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Err(e) = draw_sales(canvas, &SALES) {
                    log::warn!("Failed to draw sales chart: {}", e);
                }
            }
            || ()
        }, ());
    }

    html! {
        <div class="sales-chart">
            <canvas ref={canvas_ref} style="width: 100%; height: auto;"></canvas>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub stat: Stat,
}

#[function_component]
pub fn StatCard(props: &StatCardProps) -> Html {
    let counter = use_mut_ref(|| CountUp::new(props.stat.value, COUNT_UP_MS));
    let shown = use_state(|| 0.0_f64);
    let running = use_state(|| true);

    {
        let millis = count_up_interval(*running);
        let counter = counter.clone();
        let shown = shown.clone();
        let running = running.clone();
        use_interval(
            move || {
                let mut counter = counter.borrow_mut();
                shown.set(counter.tick());
                if counter.is_done() {
                    running.set(false);
                }
            },
            millis,
        );
    }

    html! {
        <div class="stat-card">
            <div class="stat-value">{format!("{}{}", format_stat(*shown), props.stat.suffix)}</div>
            <div class="stat-label">{props.stat.label}</div>
        </div>
    }
}

#[function_component]
pub fn Growth() -> Html {
    html! {
        <section id="growth" class="growth-section">
            <h2>{"My Growth & Sales (2019–2025)"}</h2>
            <div class="growth-grid">
                <SalesChart />
                <div class="stats-grid">
                    { for STATS.iter().map(|stat| html! { <StatCard key={stat.label} stat={*stat} /> }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_ceiling() {
        assert!((chart_ceiling(&SALES) - 672.0).abs() < 1e-9);
        assert!((chart_ceiling(&[]) - 1.2).abs() < 1e-9);
        let tiny = [SalesPoint { year: 2020, value: 0.5 }];
        assert!((chart_ceiling(&tiny) - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(year_bounds(&SALES), Some((2019, 2025)));
        assert_eq!(year_bounds(&[]), None);
        assert_eq!(year_bounds(&[SalesPoint { year: 2020, value: 1.0 }]), Some((2020, 2021)));
    }

    #[test]
    fn test_count_up_reaches_exact_target() {
        let mut counter = CountUp::new(1200.0, 1000);
        assert_eq!(CountUp::tick_ms(1000), 16);
        let mut ticks = 0;
        let mut last = 0.0;
        while !counter.is_done() {
            let value = counter.tick();
            assert!(value >= last);
            last = value;
            ticks += 1;
            assert!(ticks < 100, "count-up never finished");
        }
        assert_eq!(counter.value(), 1200.0);
    }

    #[test]
    fn test_count_up_fractional_target() {
        let mut counter = CountUp::new(4.9, 1000);
        let first = counter.tick();
        assert_eq!(first.fract(), 0.0);
        while !counter.is_done() {
            counter.tick();
        }
        assert_eq!(format_stat(counter.value()), "4.9");
    }

    #[test]
    fn test_count_up_long_duration_uses_larger_ticks() {
        assert_eq!(CountUp::tick_ms(6000), 100);
        assert!(CountUp::new(0.0, 1000).is_done());
    }

    #[test]
    fn test_count_up_interval_stops_when_done() {
        assert_eq!(count_up_interval(true), 16);
        assert_eq!(count_up_interval(false), 0);
    }
}
