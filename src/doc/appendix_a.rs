/*!
# Error Messages

Every error stops compilation. No `out.c` is written.

## Lexical errors

`UNKNOWN TOKEN` is a character that can't start anything, such as `@`
or `!` without a following `=`.

`ILLEGAL CHARACTER` is a `%`, `\`, tab or other control character inside
a string. A string that runs into the end of the line ends up here too.

`MALFORMED NUMBER` is a decimal point with no digit after it.

## Syntax errors

`SYNTAX ERROR` says what was expected and what was found instead.

```text
SYNTAX ERROR IN LINE 3 (5..6); EXPECTED COMPARISON OPERATOR, GOT THEN
```

Forgetting `LET` is common enough to get a hint.

```text
SYNTAX ERROR IN LINE 1 (0..1); EXPECTED STATEMENT (MISSING LET?), GOT IDENT
```

## Semantic errors

`UNDEFINED VARIABLE` is a variable used in an expression before any `LET`
or `INPUT` of it. A `LET` creates its variable before reading the
expression, so `LET x = x + 1` is allowed as the first mention of `x`.

`DUPLICATE LABEL` is a second `LABEL` with a name that is already taken.

`UNDEFINED LABEL` is a `GOTO` to a label that doesn't exist anywhere in the
program. This is checked after the whole program has been read, so it is
always reported last. When several labels are missing, the first `GOTO`
in the file is the one reported.

## File errors

`FILE NOT FOUND` and `DISK I/O ERROR` come from reading the source or
writing `out.c`.

*/
