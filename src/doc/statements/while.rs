/*!
# `WHILE <comparison> REPEAT` ... `ENDWHILE`

## Purpose
Loop until the comparison is false.

## Remarks
The comparison is tested before every pass, including the first,
so the body may never run.

## Example
```text
LET i = 1
WHILE i <= 3 REPEAT
    PRINT i
    LET i = i + 1
ENDWHILE
```
```text
1.00
2.00
3.00
```

*/
