use anyhow::Result;
use pokequiz::config::Config;
use pokequiz::quiz::{QuizController, QuizEvent};
use pokequiz::round::CHOICE_COUNT;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when the variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pokequiz=info".parse()?),
        )
        .init();

    info!("Starting Pokémon name quiz");

    // Load configuration from environment
    let config = Config::from_env()?;

    let mut quiz = QuizController::new(config)?;
    quiz.subscribe(render_event);

    // First question. On failure the placeholders stay on screen and the
    // user can retry with `n`.
    let _ = quiz.next_round().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        render_prompt(&quiz);

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "" => {}
            "q" => break,
            "l" => {
                let language = quiz.toggle_language();
                println!("表示言語: {}", language.code());
            }
            "n" => {
                let _ = quiz.next_round().await;
            }
            input => match input.parse::<usize>() {
                Ok(n) if (1..=CHOICE_COUNT).contains(&n) => {
                    let selected = quiz
                        .round()
                        .and_then(|round| round.choices.get(n - 1))
                        .map(|choice| choice.text(quiz.language()).to_string());

                    if let Some(selected) = selected {
                        let _ = quiz.submit_answer(&selected).await;
                    }
                }
                _ => println!("? ({})", input),
            },
        }
    }

    info!("Quiz finished");
    Ok(())
}

/// Print published quiz events: the new question heading and image, and
/// the verdict for an answered question.
fn render_event(event: &QuizEvent) {
    match event {
        QuizEvent::RoundReady(round) => {
            println!();
            println!("{}", round.question_text);
            println!("[画像] {}", round.image_url);
        }
        QuizEvent::AnswerJudged {
            correct,
            correct_answer,
        } => {
            if *correct {
                println!("正解！🎉");
            } else {
                println!("不正解！正しい答えは {} です。", correct_answer);
            }
        }
    }
}

/// Print the choice list in the active display language, or the first-load
/// placeholders when no round has been published yet.
fn render_prompt(quiz: &QuizController) {
    match quiz.round() {
        Some(round) => {
            for (i, choice) in round.choices.iter().enumerate() {
                println!("  {}. {}", i + 1, choice.text(quiz.language()));
            }
        }
        None => {
            println!();
            println!("ポケモンの名前は何ですか？");
            println!("画像がありません");
        }
    }
    println!("(1-4: answer, l: toggle language, n: next question, q: quit)");
}
