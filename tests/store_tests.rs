// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{date, serve_once};
use finboard::db;
use finboard::models::{NewTransaction, TransactionKind};
use finboard::store::{RestStore, SqliteStore, TransactionStore};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> SqliteStore {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    SqliteStore::new(conn)
}

fn new_tx(day: &str, kind: TransactionKind, amount: i64) -> NewTransaction {
    NewTransaction {
        kind,
        description: "Mercado".into(),
        category: "Alimentación".into(),
        account: "Efectivo".into(),
        date: date(day),
        amount: Decimal::from(amount),
        payment_method: "Nequi".into(),
        notes: None,
        receipt: Some("recibo.pdf".into()),
    }
}

#[test]
fn sqlite_fetches_newest_first() {
    let store = setup();
    store.insert(&new_tx("2025-01-02", TransactionKind::Expense, 10)).unwrap();
    store.insert(&new_tx("2025-01-05", TransactionKind::Income, 20)).unwrap();
    store.insert(&new_tx("2025-01-02", TransactionKind::Expense, 30)).unwrap();

    let all = store.fetch_all().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].date, date("2025-01-05"));
    // same day: later insert first
    assert_eq!(all[1].amount, Decimal::from(30));
    assert_eq!(all[2].amount, Decimal::from(10));
    assert_eq!(all[0].receipt.as_deref(), Some("recibo.pdf"));
}

#[test]
fn sqlite_latest_respects_limit() {
    let store = setup();
    for day in 1..=7 {
        store
            .insert(&new_tx(&format!("2025-03-0{}", day), TransactionKind::Expense, day))
            .unwrap();
    }
    let latest = store.fetch_latest(5).unwrap();
    assert_eq!(latest.len(), 5);
    assert_eq!(latest[0].date, date("2025-03-07"));
    assert_eq!(latest[4].date, date("2025-03-03"));
}

#[test]
fn sqlite_insert_assigns_id_and_keeps_kind() {
    let store = setup();
    let saved = store.insert(&new_tx("2025-01-02", TransactionKind::Income, 99)).unwrap();
    assert_eq!(saved.id, "1");
    let kind: String = store
        .connection()
        .query_row("SELECT kind FROM transactions WHERE id=1", [], |r| r.get(0))
        .unwrap();
    assert_eq!(kind, "income");
}

#[test]
fn rest_fetch_maps_hosted_columns() {
    let body = r#"[
        {"id": "a1", "tipo": "gasto", "descripcion": "Bus", "categoria": "Transporte",
         "cuenta": "Efectivo", "fecha": "2025-06-20", "monto": 2950, "metodo_pago": "Efectivo",
         "notas": null, "recibo": null},
        {"id": 7, "tipo": "ingreso", "descripcion": "Pago", "categoria": "Salario",
         "cuenta": "Cuenta Corriente", "fecha": "2025-06-01T00:00:00", "monto": 3500000.5,
         "metodo_pago": "Transferencia", "notas": "junio", "recibo": null}
    ]"#;
    let (url, server) = serve_once(200, body);
    let store = RestStore::new(&url, "secret").unwrap();
    let txs = store.fetch_latest(5).unwrap();
    let request = server.join().unwrap();

    assert!(request.starts_with("GET /rest/v1/transacciones?select=*&order=fecha.desc&limit=5"));
    assert!(request.to_lowercase().contains("apikey: secret"));
    assert_eq!(txs.len(), 2);
    assert_eq!(txs[0].kind, TransactionKind::Expense);
    assert_eq!(txs[0].payment_method, "Efectivo");
    assert_eq!(txs[1].id, "7");
    assert_eq!(txs[1].date, date("2025-06-01"));
    assert_eq!(txs[1].amount, "3500000.5".parse::<Decimal>().unwrap());
}

#[test]
fn rest_insert_sends_snake_case_payment_key() {
    let body = r#"[{"id": "n1", "tipo": "gasto", "descripcion": "Mercado",
        "categoria": "Alimentación", "cuenta": "Efectivo", "fecha": "2025-02-03",
        "monto": 85000, "metodo_pago": "Nequi", "notas": null, "recibo": "recibo.pdf"}]"#;
    let (url, server) = serve_once(201, body);
    let store = RestStore::new(&url, "").unwrap();
    let saved = store
        .insert(&new_tx("2025-02-03", TransactionKind::Expense, 85000))
        .unwrap();
    let request = server.join().unwrap();

    assert!(request.starts_with("POST /rest/v1/transacciones"));
    assert!(request.contains(r#""metodo_pago":"Nequi""#));
    assert!(request.contains(r#""fecha":"2025-02-03""#));
    assert!(request.contains(r#""tipo":"gasto""#));
    assert!(request.contains(r#""monto":85000"#));
    assert_eq!(saved.id, "n1");
}

#[test]
fn rest_failure_is_an_error_not_a_panic() {
    let (url, server) = serve_once(503, "{}");
    let store = RestStore::new(&url, "k").unwrap();
    assert!(store.fetch_all().is_err());
    server.join().unwrap();
}
