use console::Style;
use fitsphot_core::detection::ThresholdMethod;
use fitsphot_core::pipeline::PipelineConfig;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_pipeline_summary(config: &PipelineConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("fitsphot Pipeline"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(17)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input_dir.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output_path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Order"),
        s.value.apply_to(config.ordering)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("On error"),
        s.value.apply_to(config.on_error)
    );
    println!();

    let detection = &config.detection;
    println!("  {}", s.header.apply_to("Detection"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Threshold"),
        s.method.apply_to(&detection.threshold_method)
    );
    if detection.threshold_method == ThresholdMethod::MeanPlusSigma {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Sigma"),
            s.value.apply_to(detection.sigma_multiplier)
        );
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Grouping"),
        s.method.apply_to(detection.connectivity)
    );
    println!();
}
