/*!
# Introductory Tutorial for Teeny

Teeny is a compiler, not an interpreter. You write a program in a text
file, Teeny turns it into C, and a C compiler turns that into something
you can run. Save the following as `hello.teeny`.

```text
PRINT "Hello World"
```

Then compile it twice, once with Teeny and once with your C compiler.

<pre><code>&nbsp;$ teeny hello.teeny
&nbsp;Teeny Tiny Compiler
&nbsp;Compiling completed.
&nbsp;$ cc out.c -o hello
&nbsp;$ ./hello
&nbsp;Hello World
</code></pre>

Teeny always writes its result to `out.c` in the current directory.
If anything is wrong with your program you get an error instead and
`out.c` is left alone. The error names the line and the columns of the
offending text, then shows the line with that text underlined.

<pre><code>&nbsp;$ teeny oops.teeny
&nbsp;Teeny Tiny Compiler
&nbsp;UNDEFINED VARIABLE IN LINE 1 (6..7); y
&nbsp;PRINT <u>y</u>
</code></pre>

Every statement sits on its own line. Blank lines are fine and anything
after a `#` is a comment. Keywords are written in capitals; `print` is
a variable name, not a statement.

```text
# Count down from ten.
LET n = 10
WHILE n > 0 REPEAT
    PRINT n
    LET n = n - 1
ENDWHILE
PRINT "Liftoff!"
```

A variable springs into existence the first time you assign it with
`LET` or read it with `INPUT`. Using it before that is an error. Teeny
doesn't guess that you meant zero.

```text
INPUT guess
IF guess == 42 THEN
    PRINT "Right"
ENDIF
```

Labels and `GOTO` give you the old fashioned way of getting around.
A `GOTO` can jump forward to a label that hasn't appeared yet.

```text
GOTO skip
PRINT "never printed"
LABEL skip
```

The next chapter covers expressions and the one after that every statement.

*/
