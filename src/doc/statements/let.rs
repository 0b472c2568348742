/*!
# `LET <variable> = <expression>`

## Purpose
Assign a value to the variable.

## Remarks
The first `LET` of a variable creates it, starting at zero. The variable
exists before its expression is read, so `LET a = a + 1` as the first
mention of `a` stores 1.

## Example
```text
LET a = 10
PRINT a
LET a = a * 2
PRINT a
```
```text
10.00
20.00
```

*/
