// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, FieldError};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidSlug(String::from("a/b"));
    assert_eq!(
        format!("{err}"),
        "Invalid slug 'a/b': must be non-empty and contain no '/'"
    );

    let err: DomainError = DomainError::InvalidSeasonMonth {
        field: "startMonth",
        month: 12,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid startMonth: 12. Must be between 0 and 11"
    );

    let err: DomainError = DomainError::InvalidStatus(String::from("retired"));
    assert_eq!(
        format!("{err}"),
        "Invalid status 'retired': must be active or graduated"
    );

    let err: DomainError = DomainError::InvalidGraduationYear(-100_000);
    assert_eq!(format!("{err}"), "Invalid graduation year: -100000");
}

#[test]
fn test_field_error_codes_match_taxonomy() {
    let cases: Vec<(FieldError, &str)> = vec![
        (
            FieldError::MalformedDuration {
                input: String::from("x"),
            },
            "MalformedDuration",
        ),
        (
            FieldError::OutOfRange {
                value: 40_000.0,
                limit: 36_000.0,
            },
            "OutOfRange",
        ),
        (FieldError::Negative { value: -1.0 }, "OutOfRange"),
        (
            FieldError::MalformedNumber {
                input: String::from("x"),
            },
            "MalformedNumber",
        ),
        (
            FieldError::NotWholeNumber {
                input: String::from("1.5"),
            },
            "MalformedNumber",
        ),
        (
            FieldError::InvalidEnum {
                input: String::from("X"),
                allowed: "M, F",
            },
            "InvalidEnum",
        ),
        (FieldError::MissingRequiredField, "MissingRequiredField"),
        (
            FieldError::ColumnCountMismatch {
                expected: 6,
                found: 4,
            },
            "ColumnCountMismatch",
        ),
    ];

    for (err, code) in cases {
        assert_eq!(err.code(), code);
        assert!(
            err.to_string().starts_with(code),
            "'{err}' should start with {code}"
        );
    }
}

#[test]
fn test_field_error_message_names_input() {
    let err: FieldError = FieldError::MalformedDuration {
        input: String::from("bogus"),
    };
    assert_eq!(
        err.to_string(),
        "MalformedDuration: 'bogus' is not seconds, M:SS or H:M:SS"
    );
}
