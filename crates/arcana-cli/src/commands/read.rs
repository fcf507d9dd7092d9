use arcana_core::reading::render;
use arcana_core::{Session, SessionConfig};
use arcana_remote::PromptRequest;

use super::RemoteArgs;

pub fn run(
    question: &str,
    category: Option<&str>,
    picks: &[String],
    seed: Option<u64>,
    json: bool,
    remote: &RemoteArgs,
) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let mut config = SessionConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut rng = config.rng();

    let session = Session::new(&config)
        .with_category(category)
        .ask(question)
        .map_err(|e| e.to_string())?;

    let drawn = if picks.is_empty() {
        session.draw_picks(&mut rng)
    } else {
        let mut selection = session.begin_selection().map_err(|e| e.to_string())?;
        for name in picks {
            selection.accept(name).map_err(|e| e.to_string())?;
        }
        session.selection_picks(selection, &mut rng)
    }
    .map_err(|e| e.to_string())?;

    let reading = match super::remote(remote.config())? {
        Some(remote) => {
            let question = session.question().ok_or("no question asked yet")?;
            let request = PromptRequest {
                question: &question.text,
                intent: question.intent,
                category,
                picks: &drawn,
            };
            remote.runtime.block_on(remote.adapter.interpret(&request))
        }
        None => session.compose(&drawn).map_err(|e| e.to_string())?,
    };

    if json {
        let out = serde_json::to_string_pretty(&reading).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        println!("{}", render(&reading));
    }

    Ok(())
}
