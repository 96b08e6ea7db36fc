use pop_quiz::QuizApp;
use pop_quiz::model::QuizConfig;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Pop Quiz",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new(QuizConfig::from_env())))),
    )
}
