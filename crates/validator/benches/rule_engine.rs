// Rule engine benchmarks.
//
// Measures full rule-set evaluation for usernames and passwords, plus date
// disambiguation, on short valid and invalid inputs.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use formcheck_validator::validators::{
    PasswordOptions, UsernameOptions, is_date, is_strong_password, validate_username,
};

fn bench_username(c: &mut Criterion) {
    let options = UsernameOptions::default().blacklist(["admin", "root", "system"]);
    let mut group = c.benchmark_group("username");
    group.bench_function("valid", |b| {
        b.iter(|| validate_username(black_box("john.doe_42"), black_box(&options)));
    });
    group.bench_function("every_rule_fails", |b| {
        b.iter(|| validate_username(black_box("-a--b c!-"), black_box(&options)));
    });
    group.finish();
}

fn bench_password(c: &mut Criterion) {
    let options = PasswordOptions::default();
    let mut group = c.benchmark_group("password");
    group.bench_function("strong", |b| {
        b.iter(|| is_strong_password(black_box("StrongP@ss1"), black_box(&options)));
    });
    group.bench_function("weak", |b| {
        b.iter(|| is_strong_password(black_box("weak"), black_box(&options)));
    });
    group.finish();
}

fn bench_date(c: &mut Criterion) {
    let mut group = c.benchmark_group("date");
    for input in ["25/12/2020", "12-25-2020", "2020.12.25", "31/02/2020"] {
        group.bench_function(input, |b| b.iter(|| is_date(black_box(input))));
    }
    group.finish();
}

criterion_group!(benches, bench_username, bench_password, bench_date);
criterion_main!(benches);
