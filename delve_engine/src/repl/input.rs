//! Line input for the delve REPL.
//!
//! On a terminal, lines come from a rustyline editor whose tab completion
//! knows the command verbs and, after a verb, the names of everything the
//! character can currently see or carry. Without a terminal, plain stdin.

use std::cell::RefCell;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use delve_data::CharacterClass;
use lazy_static::lazy_static;
use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::CommandKey;
use crate::world::GameState;

/// What one read from the terminal produced.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

lazy_static! {
    /// Lowercase verbs, longest first so "pick lock" is tried before "lock".
    static ref VERBS: Vec<String> = {
        let mut verbs: Vec<String> = CommandKey::ALL.iter().map(|key| key.name().to_lowercase()).collect();
        verbs.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        verbs
    };
}

const ARTICLES: [&str; 3] = ["the ", "an ", "a "];

/// Names worth completing after a verb. Rebuilt from the game state every turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    nouns: Vec<String>,
}

impl Vocabulary {
    pub fn from_state(state: &GameState) -> Self {
        let mut nouns: Vec<String> = Vec::new();
        if state.character.is_none() {
            nouns.extend(CharacterClass::ALL.iter().map(|class| class.as_str().to_string()));
        }
        if let Some(room) = state.rooms.get(state.rooms.cursor()) {
            for door in room.doors.values() {
                nouns.push(door.direction.as_str().to_string());
                nouns.extend(door.material().map(str::to_string));
                nouns.push(door.title());
                nouns.push(door.full_title());
            }
            nouns.extend(room.creature.iter().map(|creature| creature.title.clone()));
            if let Some(container) = &room.container {
                nouns.push(container.title.clone());
                nouns.extend(container.contents.keys().map(|id| state.items.title_of(id).to_string()));
            }
            nouns.extend(room.floor.keys().map(|id| state.items.title_of(id).to_string()));
        }
        if let Some(character) = &state.character {
            nouns.extend(character.inventory.keys().map(|id| state.items.title_of(id).to_string()));
        }
        nouns.sort_unstable();
        nouns.dedup();
        Self { nouns }
    }

    /// Completions for `line` up to `pos`: the byte offset they replace from,
    /// and the candidate words.
    fn complete(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let head = &line[..pos];
        let lower = head.to_ascii_lowercase();
        let text_start = head.len() - head.trim_start().len();
        let text = &lower[text_start..];

        let Some(verb) = VERBS.iter().find(|verb| {
            text.strip_prefix(verb.as_str())
                .is_some_and(|rest| rest.starts_with(char::is_whitespace))
        }) else {
            let verbs = VERBS.iter().filter(|verb| verb.starts_with(text)).cloned().collect();
            return (text_start, verbs);
        };

        // skip the verb, then any spacing and a leading article
        let mut object_start = text_start + verb.len();
        object_start += lower[object_start..].len() - lower[object_start..].trim_start().len();
        if let Some(article) = ARTICLES.iter().find(|article| lower[object_start..].starts_with(**article)) {
            object_start += article.len();
        }
        let whole = self.matching(&lower[object_start..]);
        if !whole.is_empty() {
            return (object_start, whole);
        }

        // second object of PUT / TAKE, e.g. "take coin from ir"
        let word_start = lower.rfind(char::is_whitespace).map_or(0, |i| i + 1);
        (word_start, self.matching(&lower[word_start..]))
    }

    fn matching(&self, partial: &str) -> Vec<String> {
        self.nouns
            .iter()
            .filter(|noun| noun.to_ascii_lowercase().starts_with(partial))
            .cloned()
            .collect()
    }
}

struct DelveHelper {
    vocabulary: Rc<RefCell<Vocabulary>>,
}

impl Helper for DelveHelper {}

impl Completer for DelveHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = self.vocabulary.borrow().complete(line, pos);
        let pairs = words
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for DelveHelper {
    type Hint = String;
}

impl Highlighter for DelveHelper {}

impl Validator for DelveHelper {}

type LineEditor = rustyline::Editor<DelveHelper, DefaultHistory>;

/// Where the REPL gets its lines from.
pub struct Terminal {
    editor: Option<LineEditor>,
    vocabulary: Rc<RefCell<Vocabulary>>,
    history: Option<PathBuf>,
}

impl Terminal {
    pub fn open() -> Self {
        let vocabulary = Rc::new(RefCell::new(Vocabulary::default()));
        let history = dirs::data_local_dir().map(|dir| dir.join("delve").join("history.txt"));
        let editor = if io::stdin().is_terminal() {
            start_editor(&vocabulary, history.as_deref())
        } else {
            info!("stdin is not a terminal, reading plain lines");
            None
        };
        Self {
            editor,
            vocabulary,
            history,
        }
    }

    /// Point completion at what the character can see and carry right now.
    pub fn refresh(&self, state: &GameState) {
        *self.vocabulary.borrow_mut() = Vocabulary::from_state(state);
    }

    /// Read one line. A broken editor is dropped for plain stdin for the rest of the session.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let Some(editor) = self.editor.as_mut() else {
            return read_stdin(prompt);
        };
        match editor.readline(prompt) {
            Ok(line) => {
                self.remember(&line);
                Ok(InputEvent::Line(line))
            },
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(err) => {
                warn!("line editor failed ({err}), reading plain stdin from now on");
                self.editor = None;
                read_stdin(prompt)
            },
        }
    }

    fn remember(&mut self, line: &str) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        if line.trim().is_empty() {
            return;
        }
        if let Err(err) = editor.add_history_entry(line) {
            warn!("could not add '{line}' to history: {err}");
        }
        if let Some(path) = &self.history
            && let Err(err) = editor.save_history(path)
        {
            warn!("could not save history to {}: {err}", path.display());
        }
    }
}

fn start_editor(vocabulary: &Rc<RefCell<Vocabulary>>, history: Option<&Path>) -> Option<LineEditor> {
    let mut editor = match LineEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            warn!("no line editor ({err}), reading plain lines");
            return None;
        },
    };
    editor.set_helper(Some(DelveHelper {
        vocabulary: Rc::clone(vocabulary),
    }));
    if let Some(path) = history {
        if let Some(dir) = path.parent()
            && let Err(err) = fs::create_dir_all(dir)
        {
            warn!("could not create {}: {err}", dir.display());
        }
        if let Err(err) = editor.load_history(path) {
            info!("starting without history from {}: {err}", path.display());
        }
    }
    Some(editor)
}

fn read_stdin(prompt: &str) -> io::Result<InputEvent> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(InputEvent::Eof);
    }
    Ok(InputEvent::Line(line.trim_end_matches(['\n', '\r']).to_string()))
}
