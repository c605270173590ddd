//! Plotting observer for charting outbreak runs.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use undead_core::{Compartment, Observer, Population};
use undead_solvers::transient::euler::Record;

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Basic outbreak").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title and no legend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely, or
/// `None` in a trace slot to skip just that trace.
///
/// [`Record<Population>`][Record] implements `Plottable<5>` with time on the
/// x-axis and one trace per compartment in `S, I, Z, R, Q` order, so a
/// `PlotObserver<5>` can be handed straight to `euler::solve`.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<5> for Record<Population> {
    fn x(&self) -> Option<f64> {
        Some(self.time)
    }

    fn traces(&self) -> [Option<f64>; 5] {
        Compartment::ALL.map(|c| Some(self.state.get(c)))
    }
}

/// An observer that collects trace data during a run and displays it via egui.
///
/// The const generic `N` is the number of traces. Record data by either:
///
/// - **Direct path** — pass `&mut PlotObserver<5>` as the observer of an
///   outbreak run; every compartment is recorded against time.
/// - **Closure path** — call [`record`][PlotObserver::record] from a closure
///   observer to plot a custom selection, such as zombies alone.
///
/// # Example — direct path
///
/// ```ignore
/// let mut obs = PlotObserver::compartments();
/// obs.record_population(0.0, &initial);
/// euler::solve(&model, initial, &config, Population::is_doomsday, &mut obs)?;
/// obs.show(ShowConfig::new().title("Latent outbreak").legend())?;
/// ```
///
/// # Example — closure path
///
/// ```ignore
/// let mut obs = PlotObserver::<1>::new(["Zombies"]);
/// euler::solve(&model, initial, &config, Population::is_doomsday, |r: &Record<Population>| {
///     obs.record(r.time, [Some(r.state.zombies)]);
///     None
/// })?;
/// obs.show(ShowConfig::new().title("Zombies over time"))?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_else(|| "Population over time".into());
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                }))
            }),
        )
    }
}

impl PlotObserver<5> {
    /// Creates an observer with one trace per compartment.
    #[must_use]
    pub fn compartments() -> Self {
        Self::new(["Susceptible", "Infected", "Zombies", "Removed", "Quarantined"])
    }

    /// Records every compartment of `population` at `time`.
    ///
    /// Useful for adding the initial state, which solvers do not emit.
    pub fn record_population(&mut self, time: f64, population: &Population) {
        self.record(time, Compartment::ALL.map(|c| Some(population.get(c))));
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the run completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("population")
                .x_axis_label("Time")
                .y_axis_label("Population");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}
