/*!
# `PRINT <string>`
Also `PRINT <expression>`.

## Purpose
Print a string or a number on its own line.

## Remarks
Numbers are always printed with two decimal places.

## Example
```text
LET a = 7
PRINT "A IS"
PRINT a / 2
```
```text
A IS
3.50
```

*/
