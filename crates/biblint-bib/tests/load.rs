use biblint_bib::{load_bibliographies, load_documents};
use biblint_types::ids;
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

fn write_file(path: &Utf8Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(path, content).expect("write file");
}

fn setup() -> (TempDir, Utf8PathBuf) {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8 path");
    (temp, root)
}

#[test]
fn bibliographies_merge_in_the_order_given() {
    let (_temp, root) = setup();
    let first = root.join("a.bib");
    let second = root.join("refs").join("b.bib");
    write_file(&first, "@misc{one,\n  year = 2001,\n}\n@misc{shared,\n}\n");
    write_file(
        &second,
        "@misc{shared,\n}\n@misc{broken,\n  year = 2002,\n",
    );

    let loaded = load_bibliographies(&[first.clone(), second.clone()]).expect("load");
    assert_eq!(loaded.files, 2);

    let keys: Vec<&str> = loaded
        .bibliography
        .entries()
        .iter()
        .map(|e| e.key())
        .collect();
    assert_eq!(keys, vec!["one", "shared", "shared", "broken"]);
    assert_eq!(loaded.bibliography.all_with_key("shared").count(), 2);

    assert_eq!(loaded.complaints.len(), 1);
    let complaint = &loaded.complaints[0];
    assert_eq!(complaint.check(), ids::CHECK_PARSE_ERROR);
    assert_eq!(complaint.path().as_str(), second.as_str());
    assert_eq!(complaint.line(), 3);
}

#[test]
fn missing_bibliography_is_an_error_naming_the_file() {
    let (_temp, root) = setup();
    let missing = root.join("nope.bib");
    let err = load_bibliographies(&[missing.clone()]).expect_err("missing file");
    assert!(format!("{err:#}").contains(missing.as_str()));
}

#[test]
fn invalid_utf8_is_read_lossily() {
    let (_temp, root) = setup();
    let path = root.join("latin1.bib");
    std::fs::write(&path, b"@misc{k,\n  title = {Caf\xe9},\n}\n").expect("write");

    let loaded = load_bibliographies(&[path]).expect("load");
    let entry = loaded.bibliography.get("k").expect("entry k");
    assert_eq!(entry.field("title"), Some("{Caf\u{FFFD}}"));
}

#[test]
fn documents_collect_citations_and_words() {
    let (_temp, root) = setup();
    let intro = root.join("intro.tex");
    let body = root.join("body.tex");
    write_file(&intro, "See \\cite{a,b}.\n");
    write_file(&body, "% \\cite{hidden}\nMore in \\citep{a}.\n");

    let loaded = load_documents(&[intro, body]).expect("load");
    assert_eq!(loaded.citations.len(), 2);
    assert_eq!(loaded.citations.locations("a").len(), 2);
    assert!(!loaded.citations.contains("hidden"));

    assert_eq!(loaded.documents.len(), 2);
    let words: Vec<&str> = loaded.documents[1]
        .words
        .iter()
        .map(|w| w.text.as_str())
        .collect();
    assert_eq!(words, vec!["More", "in"]);
    assert_eq!(loaded.documents[1].words[0].line, 2);
}
