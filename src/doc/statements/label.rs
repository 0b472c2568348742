/*!
# `LABEL <label>`

## Purpose
Mark a place in the program that `GOTO` can jump to.

## Remarks
Label names follow the same rules as variable names but live apart from
them, so a label and a variable may share a name. Declaring the same label
twice is a `DUPLICATE LABEL` error even if no `GOTO` uses it.

## Example
```text
LET n = 3
LABEL again
PRINT n
LET n = n - 1
IF n > 0 THEN
    GOTO again
ENDIF
```

*/
