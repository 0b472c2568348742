/*!
# `GOTO <label>`

## Purpose
Immediately and unconditionally move execution to the label.

## Remarks
The label may be declared anywhere in the program, before or after
the `GOTO`. If it is never declared an `UNDEFINED LABEL` error will occur
once the whole program has been read.

## Example
```text
GOTO skip
PRINT "THIS WILL NOT PRINT"
LABEL skip
PRINT "THIS WILL PRINT"
```

*/
