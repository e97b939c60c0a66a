use clip_chunks::{Chunk, Chunks, ClipChunksError, Decoration, Input};

fn chunks(text: &str, chunk_size: usize) -> Vec<Chunk> {
    Chunks::new(Input::from_bytes(text), chunk_size)
        .unwrap()
        .collect::<anyhow::Result<Vec<_>>>()
        .unwrap()
}

fn texts(text: &str, chunk_size: usize) -> Vec<String> {
    chunks(text, chunk_size)
        .into_iter()
        .map(Chunk::into_text)
        .collect()
}

fn reconstruct(chunks: &[Chunk]) -> String {
    chunks.iter().map(Chunk::fresh).collect()
}

#[test]
fn test_lines_fill_chunks_exactly() {
    assert_eq!(texts("a\nb\nc\n", 4), ["a\nb\n", "c\n"]);
}

#[test]
fn test_empty_input_has_no_chunks() {
    assert!(texts("", 4).is_empty());
}

#[test]
fn test_single_chunk_when_input_fits() {
    assert_eq!(texts("one\ntwo\n", 1989), ["one\ntwo\n"]);
}

#[test]
fn test_partial_line_is_carried_to_next_chunk() {
    let chunks = chunks("ab\ncd\nef\n", 5);
    let texts: Vec<_> = chunks.iter().map(Chunk::text).collect();

    assert_eq!(texts, ["ab\ncd", "cd\nef", "ef\n"]);
    assert_eq!(chunks[0].carried(), "");
    assert_eq!(chunks[1].carried(), "cd");
    assert_eq!(chunks[2].carried(), "ef");
    assert_eq!(chunks[1].fresh(), "\nef");
}

#[test]
fn test_trailing_partial_line_is_not_repeated_at_end() {
    assert_eq!(texts("a\nb", 10), ["a\nb"]);
    assert_eq!(texts("a\nb", 3), ["a\nb"]);
    assert_eq!(texts("a\nb\nc", 4), ["a\nb\n", "c"]);
}

// Carrying a whole newline-free chunk would re-read zero characters and emit
// the same chunk forever. Long lines are split at the chunk size instead.
#[test]
fn test_line_longer_than_chunk_is_split() {
    assert_eq!(texts("abcdefghij", 4), ["abcd", "efgh", "ij"]);
}

#[test]
fn test_line_longer_than_chunk_then_short_lines() {
    let chunks = chunks("abcdef\ng\n", 4);
    let texts: Vec<_> = chunks.iter().map(Chunk::text).collect();

    assert_eq!(texts, ["abcd", "ef\ng", "g\n"]);
    assert_eq!(chunks[1].carried(), "");
    assert_eq!(reconstruct(&chunks), "abcdef\ng\n");
}

#[test]
fn test_chunk_size_of_one() {
    assert_eq!(texts("ab\nc", 1), ["a", "b", "\n", "c"]);
}

#[test]
fn test_chunk_size_counts_characters_not_bytes() {
    let chunks = chunks("ééé\n", 2);
    let texts: Vec<_> = chunks.iter().map(Chunk::text).collect();

    assert_eq!(texts, ["éé", "é\n"]);
    assert!(chunks.iter().all(|chunk| chunk.chars() == 2));
}

#[test]
fn test_chunks_reconstruct_source_within_size() {
    let text = format!(
        "héllo wörld\n日本語のテキスト\n\nshort\n{}\nend",
        "x".repeat(30)
    );

    for chunk_size in 1..=40 {
        let chunks = chunks(&text, chunk_size);

        assert_eq!(reconstruct(&chunks), text, "chunk_size {chunk_size}");
        for chunk in &chunks {
            assert_eq!(chunk.chars(), chunk.text().chars().count());
            assert!(
                chunk.chars() <= chunk_size,
                "chunk {} has {} chars, limit {chunk_size}",
                chunk.index(),
                chunk.chars()
            );
        }
    }
}

#[test]
fn test_chunk_count_for_aligned_lines() {
    let text = "abc\n".repeat(10);

    for chunk_size in [4, 8, 12, 20] {
        let expected = text.len().div_ceil(chunk_size);
        let chunks = chunks(&text, chunk_size);

        assert_eq!(chunks.len(), expected, "chunk_size {chunk_size}");
        assert!(chunks.iter().all(|chunk| chunk.carried().is_empty()));
    }
}

#[test]
fn test_chunk_indices_count_from_one() {
    let indices: Vec<_> = chunks("a\nb\nc\nd\n", 2)
        .iter()
        .map(Chunk::index)
        .collect();

    assert_eq!(indices, [1, 2, 3, 4]);
}

#[test]
fn test_chunk_decorate() {
    let chunk = chunks("ls\n", 10).remove(0);

    assert_eq!(chunk.decorate(&Decoration::default()), "```ansi ls\n```");
    assert_eq!(chunk.decorate(&Decoration::none()), "ls\n");
}

#[test]
fn test_zero_chunk_size_is_rejected() {
    let result = Chunks::new(Input::from_bytes("a\n"), 0);

    assert!(matches!(result, Err(ClipChunksError::Config(_))));
}

#[test]
fn test_invalid_utf8_ends_iteration_with_error() {
    let mut chunks = Chunks::new(Input::from_bytes(b"a\n\xFFb"), 10).unwrap();

    let err = chunks.next().unwrap().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ClipChunksError>(),
        Some(ClipChunksError::Utf8 { byte: 2, .. })
    ));
    assert!(chunks.next().is_none());
}

#[test]
fn test_chunks_are_fused() {
    let mut chunks = Chunks::new(Input::from_bytes("a\n"), 4).unwrap();

    assert_eq!(chunks.next().unwrap().unwrap().text(), "a\n");
    assert!(chunks.next().is_none());
    assert!(chunks.next().is_none());
}

#[test]
fn test_chunk_size_getter() {
    let chunks = Chunks::new(Input::from_bytes(""), 1989).unwrap();
    assert_eq!(chunks.chunk_size(), 1989);
}
