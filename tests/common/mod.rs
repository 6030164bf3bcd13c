// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use chrono::NaiveDate;
use finboard::models::{Transaction, TransactionKind};
use rust_decimal::Decimal;

/// Serves a single HTTP response on a loopback port. The handle yields the
/// raw request (head + body) once the exchange is done.
pub fn serve_once(status: u16, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let body = body.to_string();
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut request = String::new();
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 {
                break;
            }
            if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                content_length = v.trim().parse().unwrap_or(0);
            }
            request.push_str(&line);
            if line == "\r\n" {
                break;
            }
        }
        let mut buf = vec![0u8; content_length];
        reader.read_exact(&mut buf).unwrap();
        request.push_str(&String::from_utf8_lossy(&buf));

        let mut stream = stream;
        let response = format!(
            "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });
    (format!("http://{}", addr), handle)
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn tx(id: &str, kind: TransactionKind, category: &str, account: &str, day: &str, amount: i64) -> Transaction {
    Transaction {
        id: id.to_string(),
        kind,
        description: format!("tx {}", id),
        category: category.to_string(),
        account: account.to_string(),
        date: date(day),
        amount: Decimal::from(amount),
        payment_method: "Efectivo".to_string(),
        notes: None,
        receipt: None,
    }
}

/// Mixed snapshot across two accounts and two months, newest first like
/// the stores return it.
pub fn sample() -> Vec<Transaction> {
    use TransactionKind::{Expense, Income};
    vec![
        tx("6", Expense, "Transporte", "Cuenta Corriente", "2025-06-20", 400_000),
        tx("5", Income, "Salario", "Cuenta Corriente", "2025-06-01", 3_500_000),
        tx("4", Expense, "Alimentación", "Efectivo", "2025-06-01", 800_000),
        tx("3", Expense, "Mascotas", "Tarjeta de Crédito", "2025-05-15", 150_000),
        tx("2", Expense, "Alimentación", "Cuenta Corriente", "2025-05-10", 200_000),
        tx("1", Income, "Salario", "Cuenta Corriente", "2025-05-01", 3_500_000),
    ]
}
