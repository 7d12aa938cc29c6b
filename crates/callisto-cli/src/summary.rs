use callisto_core::labeling::Labeling;
use callisto_core::pipeline::{PipelineConfig, Task};
use console::Style;

/// Largest number of components listed individually.
const MAX_LISTED_COMPONENTS: usize = 10;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_pipeline_summary(config: &PipelineConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Callisto"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(8)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    match config.threshold {
        Some(t) => println!(
            "  {:<14}{}",
            s.label.apply_to("Threshold"),
            s.value.apply_to(format!(">= {t}"))
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Threshold"),
            s.disabled.apply_to("none")
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Task"),
        s.method.apply_to(&config.task)
    );

    match &config.task {
        Task::Morphology(m) => {
            println!(
                "    {:<12}{}",
                s.label.apply_to("Dilation"),
                s.value.apply_to(format!("{0}x{0}", m.dilation_size))
            );
            println!(
                "    {:<12}{}",
                s.label.apply_to("Erosion"),
                s.value.apply_to(format!("{0}x{0}", m.erosion_size))
            );
        }
        Task::Boundary(b) => {
            println!(
                "    {:<12}{}",
                s.label.apply_to("Opening"),
                s.value.apply_to(format!("{0}x{0}", b.opening_size))
            );
            println!(
                "    {:<12}{}",
                s.label.apply_to("Erosion"),
                s.value.apply_to(format!("{0}x{0}", b.erosion_size))
            );
        }
        Task::Label(l) => {
            if l.denoise {
                println!(
                    "    {:<12}{}",
                    s.label.apply_to("Denoise"),
                    s.value.apply_to(format!("opening {0}x{0}", l.denoise_size))
                );
            } else {
                println!(
                    "    {:<12}{}",
                    s.label.apply_to("Denoise"),
                    s.disabled.apply_to("disabled")
                );
            }
            println!(
                "    {:<12}{}",
                s.label.apply_to("Policy"),
                s.value.apply_to(l.binary_policy)
            );
            if let Some(seed) = l.seed {
                println!(
                    "    {:<12}{}",
                    s.label.apply_to("Seed"),
                    s.value.apply_to(seed)
                );
            }
        }
    }
    println!();
}

pub fn print_label_summary(labeling: &Labeling) {
    let s = Styles::new();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Components"),
        s.value.apply_to(labeling.count)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Provisional"),
        s.value.apply_to(labeling.provisional_labels)
    );

    let mut by_area: Vec<_> = labeling.components.iter().collect();
    by_area.sort_unstable_by(|a, b| b.area.cmp(&a.area));
    for c in by_area.iter().take(MAX_LISTED_COMPONENTS) {
        let (min_row, max_row, min_col, max_col) = c.bbox;
        println!(
            "    #{:<5}{:>8} px  rows {}..={}  cols {}..={}",
            c.label, c.area, min_row, max_row, min_col, max_col
        );
    }
    if by_area.len() > MAX_LISTED_COMPONENTS {
        println!(
            "    {}",
            s.disabled.apply_to(format!(
                "... {} more",
                by_area.len() - MAX_LISTED_COMPONENTS
            ))
        );
    }
    println!();
}
