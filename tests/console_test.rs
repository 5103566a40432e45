use moviecli::console::{Console, ConsoleError};
use moviecli::text::Language;

const REPROMPT: &str = "Invalid choice. Enter a number between 1 and 7.";

// Helper function to create a console fed by a fixed script
fn scripted(input: &str) -> Console<&[u8], Vec<u8>> {
    Console::new(input.as_bytes(), Vec::new(), Language::English.messages())
}

fn output_of(console: Console<&[u8], Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

#[tokio::test]
async fn test_collect_returns_trimmed_answer_per_field() {
    let mut console = scripted("  Dune \nDenis Villeneuve\n 2021\n");

    let answers = console
        .collect(&["title", "director", "releaseYear"])
        .await
        .unwrap();

    assert_eq!(answers.len(), 3);
    assert_eq!(answers["title"], "Dune");
    assert_eq!(answers["director"], "Denis Villeneuve");
    assert_eq!(answers["releaseYear"], "2021");

    // Prompts are issued in order, once per field
    let output = output_of(console);
    let title = output.find("Enter title: ").unwrap();
    let director = output.find("Enter director: ").unwrap();
    let year = output.find("Enter releaseYear: ").unwrap();
    assert!(title < director && director < year);
}

#[tokio::test]
async fn test_choice_reprompts_once_per_invalid_line() {
    let mut console = scripted("abc\n0\n8\n\n3\n");

    assert_eq!(console.choice().await.unwrap(), 3);

    let output = output_of(console);
    assert_eq!(output.matches(REPROMPT).count(), 4);
    assert_eq!(output.matches("Enter choice: ").count(), 5);
}

#[tokio::test]
async fn test_invalid_choice_does_not_reask_collected_fields() {
    let mut console = scripted("Dune\nseven\n2\n");

    let answers = console.collect(&["title", "choice"]).await.unwrap();

    assert_eq!(answers["title"], "Dune");
    assert_eq!(answers["choice"], "2");

    let output = output_of(console);
    assert_eq!(output.matches("Enter title: ").count(), 1);
    assert_eq!(output.matches("Enter choice: ").count(), 2);
    assert_eq!(output.matches(REPROMPT).count(), 1);
}

#[tokio::test]
async fn test_choice_accepts_whole_range() {
    let mut console = scripted("1\n7\n");

    assert_eq!(console.choice().await.unwrap(), 1);
    assert_eq!(console.choice().await.unwrap(), 7);
    assert!(!output_of(console).contains(REPROMPT));
}

#[tokio::test]
async fn test_non_utf8_line_is_read_lossily() {
    let mut console = Console::new(
        &b"D\xE4n\n3\n"[..],
        Vec::new(),
        Language::English.messages(),
    );

    let title = console.field("title").await.unwrap();
    assert_eq!(title, "D\u{FFFD}n");

    // The next prompt is served normally
    assert_eq!(console.choice().await.unwrap(), 3);
}

#[tokio::test]
async fn test_end_of_input_closes_console() {
    let mut console = scripted("");
    assert!(matches!(console.field("title").await, Err(ConsoleError::Closed)));

    // Invalid choices followed by end of input do not loop forever
    let mut console = scripted("nine\n");
    assert!(matches!(console.choice().await, Err(ConsoleError::Closed)));
}

#[tokio::test]
async fn test_prompts_follow_language() {
    let mut console = Console::new(
        "x\n4\n".as_bytes(),
        Vec::new(),
        Language::Swedish.messages(),
    );

    assert_eq!(console.choice().await.unwrap(), 4);

    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("Ange choice: "));
    assert!(output.contains("Ogiltigt val. Ange ett nummer mellan 1 och 7."));
}
