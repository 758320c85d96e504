//! Runs in its own test binary so no global logger is ever installed.

use utils_core::Console;

#[test]
fn console_is_detached_without_a_logger() {
    assert_eq!(log::max_level(), log::LevelFilter::Off);

    let console = Console::from_environment();

    assert!(!console.has_sink());
    console.log("nobody is listening");
    console.log(&7);
    utils_core::log(None, "still nothing");
}
