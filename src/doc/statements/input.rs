/*!
# `INPUT <variable>`

## Purpose
Read a number from the user.

## Remarks
If the variable doesn't exist yet it is created. When the user types
something that isn't a number the variable is set to 0 and the bad
word is thrown away, so the next `INPUT` starts fresh.

## Example
```text
INPUT age
PRINT age
```

*/
