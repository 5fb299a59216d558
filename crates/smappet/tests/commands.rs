//! Command handler tests with mocked stdin, clipboard and terminal.

use std::io::Write;

use clap::{CommandFactory, FromArgMatches};
use smappet::cli::Cli;
use smappet::commands::Host;
use smappet::dispatch;
use smappet_core::{Casing, Engine};
use smappet_io::{
    ClipboardReader, ClipboardWriter, MockClipboard, MockStdin, MockTerminal, StdinReader,
    SystemClipboard, Terminal,
};

type MockHost = Host<MockStdin, MockClipboard, MockTerminal>;

fn host(stdin: MockStdin, clipboard: MockClipboard, terminal: MockTerminal) -> MockHost {
    Host {
        stdin,
        clipboard,
        terminal,
    }
}

fn run<S, C, T>(engine: &Engine, host: &Host<S, C, T>, argv: &[&str]) -> anyhow::Result<String>
where
    S: StdinReader + Clone + 'static,
    C: ClipboardReader + ClipboardWriter + Clone + 'static,
    T: Terminal + Clone + 'static,
{
    let matches = Cli::command().try_get_matches_from(
        std::iter::once("smappet").chain(argv.iter().copied()),
    )?;
    let cli = Cli::from_arg_matches(&matches)?;
    let mut out = Vec::new();
    dispatch(&cli, &matches, engine, host, &mut out)?;
    Ok(String::from_utf8(out)?)
}

// ============================================================================
// copy
// ============================================================================

#[test]
fn copy_writes_template_to_clipboard() {
    let clipboard = MockClipboard::empty();
    let host = host(
        MockStdin::piped("const USER_NAME = userName;"),
        clipboard.clone(),
        MockTerminal::detached(),
    );

    let out = run(&Engine::new(), &host, &["copy", "--vars", "userName"]).unwrap();

    assert_eq!(out, "");
    assert_eq!(clipboard.write_count(), 1);
    assert_eq!(
        clipboard.contents().unwrap(),
        "const {{#constantCase}}userName{{/constantCase}} = {{#camelCase}}userName{{/camelCase}};"
    );
}

#[test]
fn copy_prompts_for_variables() {
    let clipboard = MockClipboard::empty();
    let host = host(
        MockStdin::piped("fn load_user() {}"),
        clipboard.clone(),
        MockTerminal::answering(["user"]),
    );

    run(&Engine::new(), &host, &["copy"]).unwrap();

    assert_eq!(
        clipboard.contents().unwrap(),
        "fn load_{{#camelCase}}user{{/camelCase}}() {}"
    );
}

#[test]
fn copy_to_stdout_leaves_clipboard_alone() {
    let clipboard = MockClipboard::with_content("untouched");
    let host = host(
        MockStdin::piped("let userName;"),
        clipboard.clone(),
        MockTerminal::detached(),
    );
    let engine = Engine::new().casings(vec![Casing::Camel]);

    let out = run(&engine, &host, &["copy", "--vars", "userName", "--stdout"]).unwrap();

    assert_eq!(out, "let {{#camelCase}}userName{{/camelCase}};");
    assert_eq!(clipboard.write_count(), 0);
    assert_eq!(clipboard.contents().as_deref(), Some("untouched"));
}

#[test]
fn copy_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "user_name").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let host = host(
        MockStdin::terminal(),
        MockClipboard::empty(),
        MockTerminal::detached(),
    );

    let out = run(
        &Engine::new(),
        &host,
        &["copy", "--vars", "userName", "--file", &path, "--stdout"],
    )
    .unwrap();
    assert_eq!(out, "{{#snakeCase}}userName{{/snakeCase}}");
}

#[test]
fn copy_without_variables_is_a_no_op() {
    let clipboard = MockClipboard::empty();
    let host = host(
        MockStdin::piped("let userName;"),
        clipboard.clone(),
        MockTerminal::closed(),
    );

    let out = run(&Engine::new(), &host, &["copy"]).unwrap();

    assert_eq!(out, "");
    assert_eq!(clipboard.write_count(), 0);
}

#[test]
fn copy_without_text_is_a_no_op() {
    let clipboard = MockClipboard::with_content("not the selection");
    let host = host(
        MockStdin::terminal(),
        clipboard.clone(),
        MockTerminal::detached(),
    );

    run(&Engine::new(), &host, &["copy", "--vars", "userName"]).unwrap();

    assert_eq!(clipboard.write_count(), 0);
}

#[test]
fn copy_rejects_empty_name_list() {
    let clipboard = MockClipboard::empty();
    let host = host(
        MockStdin::piped("let userName;"),
        clipboard.clone(),
        MockTerminal::detached(),
    );

    let err = run(&Engine::new(), &host, &["copy", "--vars", " , "]).unwrap_err();
    assert!(format!("{err:#}").contains("no variable names given"));
    assert_eq!(clipboard.write_count(), 0);
}

#[test]
fn copy_asks_again_for_empty_name_list() {
    let terminal = MockTerminal::answering([",", "userName"]);
    let host = host(
        MockStdin::piped("let userName;"),
        MockClipboard::empty(),
        terminal.clone(),
    );

    let out = run(&Engine::new(), &host, &["copy", "--stdout"]).unwrap();
    assert_eq!(out, "let {{#camelCase}}userName{{/camelCase}};");
    assert_eq!(terminal.asked().len(), 2);
}

// ============================================================================
// paste
// ============================================================================

const TEMPLATE: &str =
    "const {{#camelCase}}userName{{/camelCase}} = {{#constantCase}}userName{{/constantCase}};";

#[test]
fn paste_renders_clipboard_template() {
    let host = host(
        MockStdin::terminal(),
        MockClipboard::with_content(TEMPLATE),
        MockTerminal::detached(),
    );

    let out = run(&Engine::new(), &host, &["paste", "--values", "first name"]).unwrap();
    assert_eq!(out, "const firstName = FIRST_NAME;");
}

#[test]
fn paste_prompts_for_values() {
    let host = host(
        MockStdin::terminal(),
        MockClipboard::with_content(TEMPLATE),
        MockTerminal::answering(["order id"]),
    );

    let out = run(&Engine::new(), &host, &["paste"]).unwrap();
    assert_eq!(out, "const orderId = ORDER_ID;");
}

#[test]
fn paste_prompt_lists_variables() {
    let terminal = MockTerminal::answering(["a, b"]);
    let host = host(
        MockStdin::terminal(),
        MockClipboard::with_content(
            "{{#camelCase}}userName{{/camelCase}} {{#snakeCase}}itemId{{/snakeCase}}",
        ),
        terminal.clone(),
    );

    let out = run(&Engine::new(), &host, &["paste"]).unwrap();

    assert_eq!(out, "a b");
    let asked = terminal.asked();
    assert_eq!(asked.len(), 1);
    assert!(asked[0].contains("New values for userName, itemId"));
}

#[test]
fn paste_prefers_piped_template() {
    let host = host(
        MockStdin::piped("{{#pascalCase}}item{{/pascalCase}}"),
        MockClipboard::with_content(TEMPLATE),
        MockTerminal::detached(),
    );

    let out = run(&Engine::new(), &host, &["paste", "--values", "order line"]).unwrap();
    assert_eq!(out, "OrderLine");
}

#[test]
fn paste_without_values_renders_names() {
    let host = host(
        MockStdin::terminal(),
        MockClipboard::with_content(TEMPLATE),
        MockTerminal::closed(),
    );

    let out = run(&Engine::new(), &host, &["paste"]).unwrap();
    assert_eq!(out, "const userName = USER_NAME;");
}

#[test]
fn paste_pairs_values_positionally() {
    let template =
        "{{#camelCase}}a{{/camelCase}} {{#snakeCase}}b{{/snakeCase}} {{#pascalCase}}c{{/pascalCase}}";
    let host = host(
        MockStdin::piped(template),
        MockClipboard::empty(),
        MockTerminal::detached(),
    );

    let out = run(&Engine::new(), &host, &["paste", "--values", "one two,three four"]).unwrap();
    assert_eq!(out, "oneTwo three_four C");
}

#[test]
fn paste_with_nothing_is_a_no_op() {
    let host = host(
        MockStdin::terminal(),
        MockClipboard::empty(),
        MockTerminal::answering(["ignored"]),
    );

    assert_eq!(run(&Engine::new(), &host, &["paste"]).unwrap(), "");
}

#[cfg(unix)]
#[test]
fn paste_fails_when_clipboard_command_fails() {
    let host = Host {
        stdin: MockStdin::terminal(),
        clipboard: SystemClipboard::new().paste_command("echo broken >&2; exit 127"),
        terminal: MockTerminal::detached(),
    };

    let err = run(&Engine::new(), &host, &["paste", "--values", "x"]).unwrap_err();
    assert!(format!("{err:#}").contains("reading template"));
    assert!(err.chain().any(|cause| cause.to_string().contains("clipboard")));

    assert!(run(&Engine::new(), &host, &["vars"]).is_err());
}

#[cfg(unix)]
#[test]
fn paste_skips_clipboard_when_template_piped() {
    let host = Host {
        stdin: MockStdin::piped(TEMPLATE),
        clipboard: SystemClipboard::new().paste_command("exit 127"),
        terminal: MockTerminal::detached(),
    };

    let out = run(&Engine::new(), &host, &["paste", "--values", "first name"]).unwrap();
    assert_eq!(out, "const firstName = FIRST_NAME;");
}

// ============================================================================
// vars / casings
// ============================================================================

#[test]
fn vars_lists_names() {
    let host = host(
        MockStdin::piped("{{#camelCase}}a{{/camelCase}}{{#snakeCase}}b{{/snakeCase}}{{#dotCase}}a{{/dotCase}}"),
        MockClipboard::empty(),
        MockTerminal::detached(),
    );

    assert_eq!(run(&Engine::new(), &host, &["vars"]).unwrap(), "a\nb\n");
    assert_eq!(
        run(&Engine::new(), &host, &["vars", "--json"]).unwrap(),
        "[\"a\",\"b\"]\n"
    );
}

#[test]
fn vars_strict_rejects_mismatch() {
    let host = host(
        MockStdin::piped("{{#camelCase}}a{{/snakeCase}}"),
        MockClipboard::empty(),
        MockTerminal::detached(),
    );

    assert_eq!(run(&Engine::new(), &host, &["vars"]).unwrap(), "a\n");
    let err = run(&Engine::new(), &host, &["vars", "--strict"]).unwrap_err();
    assert!(err.to_string().contains("does not match"));
}

#[test]
fn casings_uses_sample() {
    let host = host(
        MockStdin::terminal(),
        MockClipboard::empty(),
        MockTerminal::detached(),
    );

    let out = run(&Engine::new(), &host, &["casings", "--sample", "order id"]).unwrap();
    assert_eq!(out.lines().count(), 9);
    assert!(out.lines().next().unwrap().ends_with("orderId"));
    assert!(out.lines().last().unwrap().ends_with("order_id"));
}
