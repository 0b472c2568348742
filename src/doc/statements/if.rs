/*!
# `IF <comparison> THEN` ... `ENDIF`

## Purpose
Run the enclosed statements only when the comparison is true.

## Remarks
`THEN` ends its line and `ENDIF` sits on a line of its own.
There is no `ELSE`; test the opposite comparison instead.

## Example
```text
LET x = 5
IF x > 3 THEN
    PRINT "big"
ENDIF
```

*/
