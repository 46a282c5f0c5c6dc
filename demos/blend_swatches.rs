use layer_modes::{LayerMode, ModeConfig, Region};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let base = [
        [0.2, 0.2, 0.2, 1.0],
        [0.8, 0.3, 0.1, 1.0],
        [0.1, 0.5, 0.9, 0.5],
        [1.0, 1.0, 1.0, 1.0],
    ];
    let layer = [0.9, 0.1, 0.1, 1.0];
    let samples = base.len();
    let roi = Region::new(0, 0, 4, 1);

    for mode in LayerMode::ALL {
        let cfg = ModeConfig::from_json_str(&format!(
            r#"{{ "mode": "{}", "opacity": 0.75 }}"#,
            mode.operation_name()
        ))?;
        let op = cfg.into_operation()?;

        let input: Vec<f32> = base.iter().flatten().copied().collect();
        let aux: Vec<f32> = std::iter::repeat_n(layer, samples).flatten().collect();
        let mut out = vec![0.0; input.len()];
        op.process(&input, &aux, None, &mut out, samples, &roi, 0)?;

        let swatches: Vec<String> = out
            .chunks_exact(4)
            .map(|p| format!("({:.3} {:.3} {:.3} {:.2})", p[0], p[1], p[2], p[3]))
            .collect();
        println!("{:<14} {}", mode.short_name(), swatches.join(" "));
    }

    Ok(())
}
