use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use groundwork_core::{
    BrokenRule, BrokenRules, Entity, EntityDefinition, Props, RuleContext, RuleValidator,
    ValidatableChild, ValueObject, ValueObjectDefinition,
};

struct NotBlank;

impl RuleValidator<String> for NotBlank {
    fn name(&self) -> &str {
        "NotBlank"
    }

    fn add_rules(&self, subject: &String, _context: &RuleContext, rules: &mut BrokenRules) {
        if subject.trim().is_empty() {
            rules.add(BrokenRule::new("Value", "Value cannot be empty"));
        }
    }
}

struct NameDef;

impl ValueObjectDefinition for NameDef {
    type Value = String;

    fn validators() -> Vec<Box<dyn RuleValidator<String>>> {
        vec![Box::new(NotBlank)]
    }
}

type Name = ValueObject<NameDef>;

#[derive(Debug, Clone)]
struct RecordProps {
    fields: Vec<Name>,
}

impl RecordProps {
    fn with_fields(count: usize) -> Self {
        Self {
            fields: (0..count).map(|i| Name::create(format!("field {i}"))).collect(),
        }
    }
}

impl Props for RecordProps {
    fn validatable_children(&self) -> Vec<&dyn ValidatableChild> {
        self.fields.iter().map(|f| f as &dyn ValidatableChild).collect()
    }
}

struct RecordDef;

impl EntityDefinition for RecordDef {
    type Props = RecordProps;
}

type Record = Entity<RecordDef>;

fn bench_value_object_set_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_object_set_value");
    group.sample_size(1000);

    group.bench_function("changed_value", |b| {
        let mut name = Name::create("start".to_string());
        let mut i: u64 = 0;
        b.iter(|| {
            i += 1;
            name.set_value(black_box(format!("value {i}")));
        });
    });

    group.bench_function("unchanged_value", |b| {
        let mut name = Name::create("stable".to_string());
        b.iter(|| {
            name.set_value(black_box("stable".to_string()));
        });
    });

    group.finish();
}

fn bench_entity_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("entity_validation");

    for field_count in [1, 10, 100].iter() {
        group.throughput(Throughput::Elements(*field_count as u64));
        group.bench_with_input(
            BenchmarkId::new("validate_with_children", field_count),
            field_count,
            |b, &count| {
                let mut record = Record::create(RecordProps::with_fields(count));
                b.iter(|| {
                    record.validate();
                    black_box(record.broken_rules().len());
                });
            },
        );
    }

    group.finish();
}

fn bench_broken_rules_dedup(c: &mut Criterion) {
    let mut group = c.benchmark_group("broken_rules_dedup");

    for rule_count in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*rule_count as u64));
        group.bench_with_input(
            BenchmarkId::new("add_distinct", rule_count),
            rule_count,
            |b, &count| {
                b.iter(|| {
                    let mut rules = BrokenRules::new();
                    for i in 0..count {
                        rules.add(BrokenRule::new(format!("Property{i}"), "broken"));
                    }
                    black_box(rules.len());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_value_object_set_value,
    bench_entity_validation,
    bench_broken_rules_dedup
);
criterion_main!(benches);
