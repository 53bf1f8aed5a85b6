use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathvars::path::normalize;
use pathvars::{
    CaseSensitivity, DescriptorRegistry, MemoryStore, PathVariableManager, PathVariableResolver,
    ProjectContext, Relativizer, VariablePath,
};

fn manager_with(count: usize) -> PathVariableManager<MemoryStore> {
    let mut manager = PathVariableManager::new(
        MemoryStore::new(),
        Arc::new(DescriptorRegistry::builtin()),
        ProjectContext::default(),
    );
    for i in 0..count {
        let value = VariablePath::from_portable_string(&format!("/srv/tree{i}/src/module{i}"));
        manager.set_value(&format!("VAR{i}"), &value).unwrap();
    }
    manager
}

fn bench_path_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("path");

    group.bench_function("parse_portable", |b| {
        b.iter(|| VariablePath::from_portable_string(black_box("/a/b/c/d/e/f/g/h")));
    });

    let path = VariablePath::from_portable_string("/a/b/../c/./d/../../e");
    group.bench_function("canonicalize", |b| {
        b.iter(|| black_box(&path).canonicalize());
    });

    group.bench_function("resolve_parent_segments", |b| {
        b.iter(|| normalize::resolve_parent_segments(black_box(&path)));
    });

    let ancestor = VariablePath::from_portable_string("/users/test/projects/app");
    let descendant = VariablePath::from_portable_string("/users/test/projects/app/src/path");
    group.bench_function("is_prefix_of", |b| {
        b.iter(|| black_box(&ancestor).is_prefix_of(black_box(&descendant)));
    });

    group.finish();
}

fn bench_to_relative(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_relative");
    let relativizer = Relativizer::new(CaseSensitivity::Sensitive);

    for count in [1, 10, 100] {
        let mut manager = manager_with(count);
        let target = VariablePath::from_portable_string(&format!(
            "/srv/tree{}/src/module{}/lib/file.rs",
            count / 2,
            count / 2
        ));

        group.bench_with_input(BenchmarkId::new("prefix", count), &target, |b, target| {
            b.iter(|| relativizer.to_relative(&mut manager, black_box(target), false, None));
        });
    }

    group.finish();
}

fn bench_forced(c: &mut Criterion) {
    let mut group = c.benchmark_group("forced");
    let relativizer = Relativizer::new(CaseSensitivity::Sensitive);

    // The first call defines the derived variable; later calls reuse it.
    let mut manager = manager_with(10);
    let target = VariablePath::from_portable_string("/srv/tree3/docs/guide.md");
    group.bench_function("reuse_derived", |b| {
        b.iter(|| relativizer.to_relative(&mut manager, black_box(&target), true, None));
    });

    let mut manager = manager_with(10);
    let relative = relativizer
        .to_relative(&mut manager, &target, true, None)
        .unwrap();
    group.bench_function("resolve_derived", |b| {
        b.iter(|| manager.resolve_path(black_box(&relative)));
    });

    group.finish();
}

criterion_group!(benches, bench_path_parsing, bench_to_relative, bench_forced);
criterion_main!(benches);
