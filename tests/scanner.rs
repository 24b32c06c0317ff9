#[cfg(test)]
mod scanner_tests {
    use lambda_let as ll;

    use ll::error::LangError;
    use ll::keywords::resolve_keyword;
    use ll::scanner::*;
    use ll::token::*;

    fn assert_token_sequence(source: &str, expected: &[(TokenType, &str)]) {
        let tokens = tokenize(source).expect("source should tokenize");

        assert_eq!(tokens.len(), expected.len());

        for (actual, (expected_type, expected_lexeme)) in tokens.iter().zip(expected.iter()) {
            assert_eq!(actual.token_type, *expected_type);
            assert_eq!(actual.lexeme, *expected_lexeme);
        }
    }

    #[test]
    fn test_scanner_01_symbols() {
        assert_token_sequence(
            "(\\x->x)=",
            &[
                (TokenType::LEFT_PAREN, "("),
                (TokenType::BACKSLASH, "\\"),
                (TokenType::IDENTIFIER, "x"),
                (TokenType::ARROW, "->"),
                (TokenType::IDENTIFIER, "x"),
                (TokenType::RIGHT_PAREN, ")"),
                (TokenType::EQUAL, "="),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_02_let_program() {
        assert_token_sequence(
            "let id = \\x -> x in id 12",
            &[
                (TokenType::LET, "let"),
                (TokenType::IDENTIFIER, "id"),
                (TokenType::EQUAL, "="),
                (TokenType::BACKSLASH, "\\"),
                (TokenType::IDENTIFIER, "x"),
                (TokenType::ARROW, "->"),
                (TokenType::IDENTIFIER, "x"),
                (TokenType::IN, "in"),
                (TokenType::IDENTIFIER, "id"),
                (TokenType::NUMBER(12), "12"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_keywords_need_exact_match() {
        assert_token_sequence(
            "letter in_ inx True _false true false",
            &[
                (TokenType::IDENTIFIER, "letter"),
                (TokenType::IDENTIFIER, "in_"),
                (TokenType::IDENTIFIER, "inx"),
                (TokenType::IDENTIFIER, "True"),
                (TokenType::IDENTIFIER, "_false"),
                (TokenType::TRUE, "true"),
                (TokenType::FALSE, "false"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_number_payload_and_maximal_munch() {
        let tokens = tokenize("12 007 3x").unwrap();
        let numbers: Vec<i64> = tokens
            .iter()
            .filter_map(|t| match t.token_type {
                TokenType::NUMBER(n) => Some(n),
                _ => None,
            })
            .collect();

        assert_eq!(numbers, vec![12, 7, 3]);
        assert_eq!(tokens[3].token_type, TokenType::IDENTIFIER);
        assert_eq!(tokens[3].lexeme, "x");
    }

    #[test]
    fn test_empty_and_whitespace_only_input() {
        assert_token_sequence("", &[(TokenType::EOF, "")]);
        assert_token_sequence(" \t\r\n\n ", &[(TokenType::EOF, "")]);
    }

    #[test]
    fn test_line_numbers() {
        let tokens = tokenize("1\n  x\n\n(").unwrap();
        let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();

        assert_eq!(lines, vec![1, 2, 4, 4]);
    }

    #[test]
    fn test_unexpected_chars_token_sequence() {
        let results: Vec<_> = Scanner::new("1 $ (").collect();

        assert_eq!(results.len(), 4, "Expected NUMBER, error, LEFT_PAREN, EOF");

        assert!(matches!(&results[0], Ok(t) if t.token_type == TokenType::NUMBER(1)));
        assert!(matches!(
            results[1],
            Err(LangError::UnexpectedCharacter {
                character: '$',
                line: 1,
                column: 3
            })
        ));
        assert!(matches!(&results[2], Ok(t) if t.token_type == TokenType::LEFT_PAREN));
        assert!(matches!(&results[3], Ok(t) if t.token_type == TokenType::EOF));
    }

    #[test]
    fn test_error_column_on_later_line() {
        let err = tokenize("x\n  #").unwrap_err();

        assert!(matches!(
            err,
            LangError::UnexpectedCharacter {
                character: '#',
                line: 2,
                column: 3
            }
        ));
    }

    #[test]
    fn test_multibyte_character_is_skipped_whole() {
        let results: Vec<_> = Scanner::new("λx").collect();

        assert_eq!(results.len(), 3);
        assert!(matches!(
            results[0],
            Err(LangError::UnexpectedCharacter { character: 'λ', .. })
        ));
        assert!(matches!(&results[1], Ok(t) if t.lexeme == "x"));
    }

    // Unrecognised characters are reported, not silently treated as end of input.
    #[test]
    fn test_lone_minus_is_rejected() {
        let err = tokenize("1 - 2").unwrap_err();

        assert!(matches!(
            err,
            LangError::UnexpectedCharacter { character: '-', .. }
        ));

        assert!(tokenize("-").is_err());
        assert!(tokenize("->").is_ok());
    }

    #[test]
    fn test_tokenize_stops_at_first_error() {
        let err = tokenize("a @ b #").unwrap_err();

        assert!(matches!(
            err,
            LangError::UnexpectedCharacter { character: '@', .. }
        ));
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_integer_out_of_range() {
        let err = tokenize("99999999999999999999").unwrap_err();

        assert!(matches!(err, LangError::IntegerOutOfRange { .. }));
        assert!(tokenize("9223372036854775807").is_ok());
    }

    #[test]
    fn test_scanner_is_fused() {
        let mut scanner = Scanner::new("x");

        assert!(scanner.next().is_some());
        assert!(scanner.next().is_some());
        assert!(scanner.next().is_none());
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let source = "let f = \\x -> (f x) in f 1";

        assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
    }

    #[test]
    fn test_resolve_keyword() {
        let kw = resolve_keyword(Token::new(TokenType::IDENTIFIER, "in", 3));

        assert_eq!(kw.token_type, TokenType::IN);
        assert_eq!(kw.lexeme, "in");
        assert_eq!(kw.line, 3);

        let plain = resolve_keyword(Token::new(TokenType::IDENTIFIER, "inn", 1));
        assert_eq!(plain.token_type, TokenType::IDENTIFIER);

        let number = resolve_keyword(Token::new(TokenType::NUMBER(1), "1", 1));
        assert_eq!(number.token_type, TokenType::NUMBER(0));
    }

    #[test]
    fn test_token_display() {
        let tokens = tokenize("x 12 ->").unwrap();
        let printed: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();

        assert_eq!(
            printed,
            vec!["IDENTIFIER x null", "NUMBER 12 12", "ARROW -> null", "EOF  null"]
        );
    }
}
