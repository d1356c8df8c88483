use hdd_diversity::{Aggregation, HddConfig, HddScorer, TextInput, TextsInput};

fn main() {
    // configure: mean aggregation, sample size capped at 75, raw-text input
    let config = HddConfig {
        aggregation: Aggregation::Mean,
        max_sample_size: 75,
    };
    let whitespace = Box::new(|text: &str| {
        text.split_whitespace()
            .map(|w| w.to_lowercase())
            .collect::<Vec<String>>()
    });
    let mut scorer = HddScorer::with_config(config)
        .expect("valid config")
        .with_tokenizer(whitespace);

    // fit the corpus
    scorer
        .fit(TextsInput::Raw(vec![
            "the quick brown fox jumps over the lazy dog".to_string(),
            "the dog sleeps all day the dog dreams".to_string(),
            "a fox a dog a day".to_string(),
        ]))
        .expect("fit");

    let corpus = scorer.corpus().expect("fitted");
    println!(
        "corpus: {} texts, {} tokens, {} types",
        corpus.text_num(),
        corpus.total_tokens(),
        corpus.vocab_size()
    );

    // score every fitted text, with progress
    let scores = scorer
        .process_corpus_with_progress(|done| println!("scored {done} texts"))
        .expect("process corpus");
    for (i, score) in scores.iter().enumerate() {
        match score {
            Some(value) => println!("text {i}: HD-D = {value:.6}"),
            None => println!("text {i}: empty text, no score"),
        }
    }

    // score an ad-hoc text against the same corpus
    let ad_hoc = scorer
        .calculate(TextInput::Raw("the fox dreams of the lazy dog".to_string()))
        .expect("calculate");
    println!("ad-hoc: HD-D = {:?}", ad_hoc);
}
