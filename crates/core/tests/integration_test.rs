//! Integration tests for the full crack-sim pipeline.
//!
//! These tests verify end-to-end behavior: corpus file -> sampler -> runner
//! -> cipher -> cracker -> harness, with the ground truth checked at each step.

use crack_sim_core::{
    cipher::{shift_encrypt, Cipher, Shift, Vigenere},
    cracker::{Cracker, ShiftCracker, SubstitutionCracker, VigenereCracker},
    error::{CorpusError, Error},
    exercise_cracker,
    runner::{ShiftCipherRunner, VigenereCipherRunner},
    Corpus, Harness, Runner, RunnerConfig,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Write;

const WORDS: &str = "\
time
person
year
way
day
thing
man
world
life
hand
part
child
eye
woman
place
work
week
case
point
government
company
number
group
problem
fact
be
have
do
say
get
make
go
know
take
see
come
think
look
want
give
use
find
tell
ask
seem
feel
try
leave
call
good
new
first
last
long
great
little
own
other
old
right
big
high
different
small
large
next
early
young
important
few
public
bad
same
able
to
of
in
for
on
with
at
by
from
up
about
into
over
after
the
and
a
that
I
it
not
he
as
you
this
but
his
they
her
she
or
an
will
my
one
all
would
there
their
";

fn write_corpus() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp corpus");
    file.write_all(WORDS.as_bytes()).expect("write temp corpus");
    file.flush().expect("flush temp corpus");
    file
}

/// Sample from a real file, encrypt, crack, compare.
#[test]
fn test_full_pipeline_from_file() {
    let corpus_file = write_corpus();
    let corpus = Corpus::file(corpus_file.path());
    let runner = ShiftCipherRunner::new(RunnerConfig::default(), corpus);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let truth = runner.run(&mut rng).expect("run failed");
    assert!(!truth.plaintext.is_empty());
    assert!(truth.plaintext.chars().all(|c| c.is_ascii_lowercase()));
    assert_eq!(Shift::decrypt(&truth.key, &truth.ciphertext).unwrap(), truth.plaintext);

    let guess = ShiftCracker::new().crack(&truth.ciphertext).expect("crack failed");
    assert_eq!(guess.key, truth.key);
    assert_eq!(guess.plaintext, truth.plaintext);
}

/// Default-length plaintexts make the shift attack reliable.
#[test]
fn test_shift_accuracy_near_perfect() {
    let corpus_file = write_corpus();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let (success, failure) = exercise_cracker(
        ShiftCracker::new(),
        50,
        RunnerConfig::default(),
        Corpus::file(corpus_file.path()),
        &mut rng,
    )
    .expect("harness failed");

    assert_eq!(success + failure, 50);
    assert!(success >= 47, "success {} failure {}", success, failure);
}

/// Explicit pairing produces the same outcome as the counterpart runner.
#[test]
fn test_explicit_harness_matches_counterpart() {
    let corpus_file = write_corpus();
    let corpus = Corpus::file(corpus_file.path());
    let config = RunnerConfig::default();

    let explicit = Harness::new(ShiftCipherRunner::new(config, corpus.clone()), ShiftCracker::new())
        .exercise(10, &mut ChaCha8Rng::seed_from_u64(100))
        .unwrap();
    let paired = exercise_cracker(
        ShiftCracker::new(),
        10,
        config,
        corpus,
        &mut ChaCha8Rng::seed_from_u64(100),
    )
    .unwrap();

    assert_eq!(explicit.tally(), paired);
    assert_eq!(explicit.trials, 10);
}

/// Unsupported crackers are reported, not counted as wrong guesses.
#[test]
fn test_unsupported_crackers() {
    let corpus_file = write_corpus();
    let corpus = Corpus::file(corpus_file.path());
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let err = exercise_cracker(SubstitutionCracker, 2, RunnerConfig::default(), corpus.clone(), &mut rng)
        .unwrap_err();
    assert!(err.is_unsupported());

    let err = exercise_cracker(VigenereCracker, 2, RunnerConfig::default(), corpus, &mut rng)
        .unwrap_err();
    assert!(err.is_unsupported());
}

/// Vigenère instances honour key_length and round-trip.
#[test]
fn test_vigenere_runner_from_file() {
    let corpus_file = write_corpus();
    let runner = VigenereCipherRunner::new(
        RunnerConfig {
            plaintext_length: 16,
            key_length: 7,
        },
        Corpus::file(corpus_file.path()),
    );

    let truth = runner.run(&mut ChaCha8Rng::seed_from_u64(3)).unwrap();
    assert_eq!(truth.key.len(), 7);
    assert_eq!(Vigenere::decrypt(&truth.key, &truth.ciphertext).unwrap(), truth.plaintext);
}

/// The uppercase "I" line is normalised rather than rejected by the cipher.
#[test]
fn test_corpus_normalisation_keeps_text_valid() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "I\nDon't\n\nPANIC").unwrap();
    file.flush().unwrap();

    let runner = ShiftCipherRunner::new(
        RunnerConfig {
            plaintext_length: 10,
            key_length: 1,
        },
        Corpus::file(file.path()),
    );
    let truth = runner.run(&mut ChaCha8Rng::seed_from_u64(0)).unwrap();
    assert_eq!(truth.plaintext, "idontpanic");
}

#[test]
fn test_missing_corpus() {
    let runner = ShiftCipherRunner::new(RunnerConfig::default(), Corpus::file("/no/such/words"));
    match runner.run(&mut ChaCha8Rng::seed_from_u64(0)) {
        Err(Error::Corpus(CorpusError::Unavailable { .. })) => {}
        other => panic!("expected Unavailable, got {:?}", other),
    }
}

/// A longer text is cracked regardless of the key used.
#[test]
fn test_crack_known_text() {
    let text = "whenininthecourseofhumaneventsitbecomesnecessaryforonepeopletodissolvethepoliticalbandswhichhaveconnectedthemwithanother";
    let cracker = ShiftCracker::new();
    for key in [1, 7, 13, 25, 100, -3] {
        let guess = cracker.crack(&shift_encrypt(key, text).unwrap()).unwrap();
        assert_eq!(guess.key, key.rem_euclid(26));
        assert_eq!(guess.plaintext, text);
    }
}
