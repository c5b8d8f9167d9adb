use estree_validator::estree::{self, Value};

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use serde_json::json;

/// A function declaration whose body exercises loops, labels, switches, and object literals.
fn synthesized_function(index: usize) -> serde_json::Value {
    let name = format!("f{}", index);
    json!({
        "type": "FunctionDeclaration",
        "id": { "type": "Identifier", "name": name },
        "params": [{ "type": "Identifier", "name": "a" }, { "type": "Identifier", "name": "b" }],
        "body": {
            "type": "BlockStatement",
            "body": [
                {
                    "type": "LabeledStatement",
                    "label": { "type": "Identifier", "name": "outer" },
                    "body": {
                        "type": "WhileStatement",
                        "test": { "type": "Identifier", "name": "a" },
                        "body": {
                            "type": "SwitchStatement",
                            "discriminant": { "type": "Identifier", "name": "b" },
                            "cases": [
                                {
                                    "type": "SwitchCase",
                                    "test": { "type": "Literal", "value": 1 },
                                    "consequent": [{ "type": "BreakStatement", "label": null }]
                                },
                                {
                                    "type": "SwitchCase",
                                    "test": null,
                                    "consequent": [{
                                        "type": "ContinueStatement",
                                        "label": { "type": "Identifier", "name": "outer" }
                                    }]
                                }
                            ]
                        }
                    }
                },
                {
                    "type": "ReturnStatement",
                    "argument": {
                        "type": "ObjectExpression",
                        "properties": [
                            {
                                "type": "Property",
                                "kind": "init",
                                "key": { "type": "Identifier", "name": "sum" },
                                "value": {
                                    "type": "BinaryExpression",
                                    "operator": "+",
                                    "left": { "type": "Identifier", "name": "a" },
                                    "right": { "type": "Identifier", "name": "b" }
                                }
                            },
                            {
                                "type": "Property",
                                "kind": "get",
                                "key": { "type": "Literal", "value": "x" },
                                "value": {
                                    "type": "FunctionExpression",
                                    "id": null,
                                    "params": [],
                                    "body": { "type": "BlockStatement", "body": [] }
                                }
                            }
                        ]
                    }
                }
            ]
        }
    })
}

fn synthesized_program(num_functions: usize) -> Value {
    let body: Vec<serde_json::Value> = (0..num_functions).map(synthesized_function).collect();
    Value::from(json!({ "type": "Program", "body": body }))
}

pub fn validation_benches(c: &mut Criterion) {
    c.bench_function("1000 functions > is_valid", |b| {
        b.iter_batched(
            || synthesized_program(1000),
            |program| estree::is_valid(&program),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("1000 functions > errors", |b| {
        b.iter_batched(
            || synthesized_program(1000),
            |program| estree::errors(&program).len(),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(validation, validation_benches);
criterion_main!(validation);
