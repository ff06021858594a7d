use transform::{
    reverse, Granularity, Intensity, ReverseOptions, Style, TransformConfig, TransformEngine,
};

const SAMPLE: &str = include_str!("sample.txt");

fn main() {
    let engine = TransformEngine::new();

    for style in [Style::Formal, Style::Casual, Style::Academic] {
        let cfg = TransformConfig::default()
            .with_style(style)
            .with_intensity(Intensity::Significant);
        match engine.transform_seeded(SAMPLE, &cfg, Some(2024)) {
            Ok(result) => {
                println!("== {style} ({} rules applied)", result.applied_rule_count);
                println!("{}", result.output_text);
                println!(
                    "similarity {:.3} via {}, unique: {}",
                    result.similarity_score,
                    result.similarity_method,
                    result.is_sufficiently_unique
                );
                println!();
            }
            Err(err) => eprintln!("{style}: {err}"),
        }
    }

    let opts = ReverseOptions::default().with_preserve_paragraphs(true);
    println!("== sentences reversed per paragraph");
    println!("{}", reverse(SAMPLE, Granularity::Sentence, &opts));
}
