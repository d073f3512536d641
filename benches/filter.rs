use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::hint::black_box;

use phonebook::prelude::{Contact, ContactManager, Form, MemStorage, filter_by_first_name};

const FIRST_NAMES: &[&str] = &[
    "Arto", "Ada", "Dan", "Mary", "Ann", "Lee", "Uche", "Patricia", "Diane", "John",
];
const LAST_NAMES: &[&str] = &["Hellas", "Lovelace", "Abramov", "Poppendieck", "Lee"];

// Contacts with random first/last name pairs and unique ids.
fn make_contacts(n: usize) -> Vec<Contact> {
    let mut rng = rand::rng();
    (0..n)
        .map(|i| {
            let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Ada");
            let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Lee");
            let number = format!("040-{:06}", rng.random_range(0..1_000_000));
            Contact::new(i as u64, &format!("{first} {last} {i}"), &number)
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let contacts = make_contacts(5_000);

    c.bench_function("filtering 5k contacts by first name", |b| {
        b.iter(|| black_box(filter_by_first_name(&contacts, black_box("an"))));
    });

    c.bench_function("filtering 5k contacts with empty search", |b| {
        b.iter(|| black_box(filter_by_first_name(&contacts, black_box(""))));
    });
}

// Submitting a name already present walks the whole list before deciding.
fn bench_reconcile(c: &mut Criterion) {
    let contacts = make_contacts(5_000);
    let last_name = contacts[contacts.len() - 1].name.to_uppercase();

    c.bench_function("reconciling against 5k contacts (update path)", |b| {
        b.iter_batched(
            || {
                let mut manager =
                    ContactManager::new(Box::new(MemStorage::with_contacts(contacts.clone())));
                manager.load().expect("load from memory");
                manager.form = Form::new(&last_name, "050-1");
                manager
            },
            |mut manager| {
                black_box(manager.submit().expect("submit"));
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_filter, bench_reconcile);
criterion_main!(benches);
