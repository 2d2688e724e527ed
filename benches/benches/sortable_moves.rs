// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_sortable::engine::DragEvent;
use understory_sortable::identity::{DefaultIdentity, ItemId};
use understory_sortable::reorder::{array_move, move_by_key, move_in_place};
use understory_sortable::session::SortableController;
use understory_sortable::strategy::Layout;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_index(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }
}

#[derive(Clone)]
struct Row {
    id: u64,
    _payload: [u8; 32],
}

impl ItemId for Row {
    fn item_id(&self) -> String {
        self.id.to_string()
    }
}

fn gen_rows(n: usize) -> Vec<Row> {
    (0..n as u64)
        .map(|id| Row {
            id,
            _payload: [0; 32],
        })
        .collect()
}

fn gen_moves(n: usize, count: usize) -> Vec<(usize, usize)> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| (rng.next_index(n), rng.next_index(n)))
        .collect()
}

fn bench_array_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_move");
    for &n in &[100_usize, 1_000, 10_000] {
        let rows = gen_rows(n);
        let moves = gen_moves(n, 64);
        group.throughput(Throughput::Elements(moves.len() as u64));
        group.bench_function(format!("copy_{n}"), |b| {
            b.iter(|| {
                for &(from, to) in &moves {
                    black_box(array_move(&rows, from, to));
                }
            });
        });
        group.bench_function(format!("in_place_{n}"), |b| {
            b.iter_batched(
                || rows.clone(),
                |mut rows| {
                    for &(from, to) in &moves {
                        move_in_place(&mut rows, from, to);
                    }
                    black_box(rows);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_move_by_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_by_key");
    for &n in &[100_usize, 1_000, 10_000] {
        let rows = gen_rows(n);
        let keys: Vec<(String, String)> = gen_moves(n, 16)
            .into_iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();
        group.throughput(Throughput::Elements(keys.len() as u64));
        group.bench_function(format!("default_identity_{n}"), |b| {
            b.iter(|| {
                for (from, to) in &keys {
                    black_box(move_by_key(&rows, from, to, &DefaultIdentity));
                }
            });
        });
        let by_id = |r: &Row| r.id;
        let id_keys: Vec<(u64, u64)> = keys
            .iter()
            .map(|(a, b)| (a.parse().unwrap_or(0), b.parse().unwrap_or(0)))
            .collect();
        group.bench_function(format!("closure_identity_{n}"), |b| {
            b.iter(|| {
                for (from, to) in &id_keys {
                    black_box(move_by_key(&rows, from, to, &by_id));
                }
            });
        });
    }
    group.finish();
}

fn bench_gesture(c: &mut Criterion) {
    let n = 1_000;
    let rows = gen_rows(n);
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let overs: Vec<String> = (0..256).map(|_| rng.next_index(n).to_string()).collect();
    c.bench_function("gesture_256_overs_1000_rows", |b| {
        b.iter(|| {
            let mut sortable: SortableController<Row, _> =
                SortableController::new(DefaultIdentity, Layout::Vertical);
            let mut out = None;
            sortable.drag_start("0".to_string());
            for k in &overs {
                sortable.handle(DragEvent::Over(Some(k.clone())), &rows, &mut |o: Vec<Row>| {
                    out = Some(o);
                });
            }
            sortable.handle(DragEvent::End(Some("999".to_string())), &rows, &mut |o: Vec<Row>| {
                out = Some(o);
            });
            black_box(out.map(|o| o.len()));
        });
    });
}

criterion_group!(benches, bench_array_move, bench_move_by_key, bench_gesture);
criterion_main!(benches);
