/*!
# Introductory Tutorial for Applesoft BASIC

Open a terminal and run the executable. When you see the following, you
are ready for this tutorial. Type QUIT (or EXIT) to leave.
<pre><code>&nbsp;  APPLESOFT BASIC
&nbsp;  ]█
</code></pre>

The `]` prompt means the machine is waiting for a statement. A statement
describes work you want done. Let's print something. Lines you type are
marked with `>` in this tutorial; the prompt shows them in the flesh.

<pre><code>&nbsp;> PRINT "HELLO WORLD"
&nbsp;  HELLO WORLD
</code></pre>

A statement typed on its own runs immediately. This is immediate mode.
To build a program instead, put a decimal line number between 0 and
63999 in front of the statement. Numbered lines are stored, not run.

<pre><code>&nbsp;> 10 PRINT "HELLO WORLD"
&nbsp;> 20 GOTO 10
&nbsp;> LIST
&nbsp;  10 PRINT "HELLO WORLD"
&nbsp;  20 GOTO 10
</code></pre>

`RUN` starts the stored program at its lowest line number. Lines run in
line-number order, so you can enter them in any order you like and
renumber your thinking instead of your program. Entering a line number
that already exists replaces that line; entering a bare line number
deletes it.

`?` is an abbreviation for `PRINT`, and keywords are accepted in any
case — `print`, `Print`, and `PRINT` all mean the same thing. Variable
names are uppercased the same way, so `hello` and `HELLO` are one
variable.

A program that is running can be halted from inside with `STOP`, which
reports the line it stopped on:

<pre><code>&nbsp;  BREAK IN 20
</code></pre>

`CONT` picks up where the break happened. `SAVE "NAME"` writes the
program to a file, one line per line, and `LOAD "NAME"` reads one back.
*/
