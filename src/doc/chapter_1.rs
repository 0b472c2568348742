/*!
# Expressions

Teeny has one type of value, the number. Every variable holds one and
every expression produces one. In the generated C they are all `float`.

Variable names are an ASCII letter followed by any number of ASCII letters
and digits. Names are case sensitive and may not be one of the keywords.

```text
LET total = 0
LET x2 = 1.5
```

Number literals are a run of digits with an optional decimal part. A decimal
point must have at least one digit after it, so `3.` is an error while `3.0`
is fine. There is no exponent notation. A minus sign in front of a number is
part of the expression, not the literal.

Expressions are evaluated with the usual precedence.

| Precedence | Operators | Meaning |
|-|-|-|
| 3 | - + | Unary negation and unity |
| 2 | * / | Multiplication and division |
| 1 | + - | Addition and subtraction |

```text
LET a = 2 + 3 * 4    # 14
LET b = -a / 2       # -7
```

There are no parentheses. Precedence is all you get, so split a
complicated calculation across several `LET` statements.

Division follows C. Dividing two whole number literals such as `7 / 2`
happens before the value reaches a variable and gives `3`. Write `7.0 / 2`
to get `3.5`. Division by a variable is always done in floating point.

Comparisons only appear in `IF` and `WHILE`. A condition has at least one
comparison operator; `IF x THEN` is a syntax error.

| Operator | Meaning |
|-|-|
| == | Equality |
| != | Inequality |
| < | Less than |
| <= | Less than or equal |
| > | Greater than |
| >= | Greater than or equal |

Comparisons can be chained, and they behave the way C chains them.
`a < b < c` compares `a < b` first, giving 0 or 1, then compares that to `c`.

Strings only appear in `PRINT`. A string is surrounded by quotation marks and
must fit on one line. Because the text is copied into a C format string, it
may not contain `%`, `\`, tabs or other control characters.

```text
PRINT "Total:"
PRINT total
```

*/
